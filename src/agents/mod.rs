// Request-handling agents: the upload pipeline and the answer service.

pub mod answer;
pub mod file_upload;
