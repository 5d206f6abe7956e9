pub mod admin;

pub mod auth;

pub mod courses;

pub mod departments;

pub mod professors;

pub mod reviews;

pub mod search;

pub mod users;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use departments::configure_departments_routes;
pub use professors::configure_professors_routes;
pub use reviews::configure_reviews_routes;
pub use search::configure_search_routes;
pub use users::configure_user_routes;
