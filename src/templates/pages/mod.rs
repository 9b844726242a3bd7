pub mod areas;
pub mod contact;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod properties;
pub mod property_detail;

pub use areas::areas_page;
pub use contact::contact_page;
pub use home::home_page;
pub use project_detail::project_detail_page;
pub use projects::projects_page;
pub use properties::properties_page;
pub use property_detail::property_detail_page;
