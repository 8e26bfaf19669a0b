pub use form::{ContactForm, ContactFormConfig, ContactFormDeps};
pub use record::{ContactRecordRepositoryConfig, ContactRecordRepositoryImpl};
pub use submit::{SimulatedContactSubmitService, SimulatedContactSubmitServiceConfig};

mod form;
mod record;
mod submit;
