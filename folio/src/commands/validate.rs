use clap::{Args, ValueEnum};
use folio_models::{
    contact::ContactField,
    validation::{validate_field, ValidationState},
};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// The field to validate
    #[arg(value_enum)]
    pub field: FieldArg,
    /// The value to validate
    pub value: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Name,
    Email,
    Subject,
    Message,
}

impl From<FieldArg> for ContactField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Name => Self::Name,
            FieldArg::Email => Self::Email,
            FieldArg::Subject => Self::Subject,
            FieldArg::Message => Self::Message,
        }
    }
}

impl ValidateArgs {
    pub fn invoke(self) {
        println!("{}", describe(validate_field(self.field.into(), &self.value)));
    }
}

fn describe(state: ValidationState) -> String {
    match state.message {
        None => "valid".into(),
        Some(message) => format!("invalid: {message}"),
    }
}
