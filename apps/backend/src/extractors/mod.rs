pub mod document_id;
pub mod owned_subject;
pub mod validated_json;

pub use document_id::{PostId, RequestId};
pub use owned_subject::OwnedSubject;
pub use validated_json::ValidatedJson;
