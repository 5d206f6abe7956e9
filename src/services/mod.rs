pub mod auth;
pub mod courses;
pub mod departments;
pub mod professors;
pub mod reviews;
pub mod search;
pub mod system;
pub mod users;

pub use auth::AuthService;
pub use courses::CourseService;
pub use departments::DepartmentService;
pub use professors::ProfessorService;
pub use reviews::ReviewService;
pub use search::SearchService;
pub use system::SystemService;
pub use users::UserService;
