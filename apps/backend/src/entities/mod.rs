pub mod posts;
pub mod requests;

pub use posts::Entity as Posts;
pub use posts::Model as Post;
pub use requests::Entity as Requests;
pub use requests::Model as Request;
