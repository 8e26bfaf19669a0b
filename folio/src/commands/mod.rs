pub mod submissions;
pub mod submit;
pub mod validate;
