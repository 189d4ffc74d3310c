//! UI Components
//!
//! Survey form, list, item card and header widgets.

mod health_badge;
mod survey_form;
mod survey_item;
mod survey_list;

pub use health_badge::HealthBadge;
pub use survey_form::SurveyForm;
pub use survey_item::SurveyItem;
pub use survey_list::SurveyList;
