//! 预导入模块，方便使用

pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::professor_courses::{
    ActiveModel as ProfessorCourseActiveModel, Entity as ProfessorCourses,
    Model as ProfessorCourseModel,
};
pub use super::professor_departments::{
    ActiveModel as ProfessorDepartmentActiveModel, Entity as ProfessorDepartments,
    Model as ProfessorDepartmentModel,
};
pub use super::professors::{
    ActiveModel as ProfessorActiveModel, Entity as Professors, Model as ProfessorModel,
};
pub use super::reviews::{ActiveModel as ReviewActiveModel, Entity as Reviews, Model as ReviewModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::verification_codes::{
    ActiveModel as VerificationCodeActiveModel, Entity as VerificationCodes,
    Model as VerificationCodeModel,
};
