use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Args;
use folio_config::Config;
use folio_core_contact_contracts::{messages, ContactFormEvent, SubmitOutcome};
use folio_dom_contracts::FormView;
use folio_dom_headless::HeadlessFormView;
use folio_models::contact::{ContactField, ContactFormData};

use crate::environment;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Your full name
    #[arg(long, default_value = "")]
    pub name: String,
    /// Your email address
    #[arg(long, default_value = "")]
    pub email: String,
    /// The subject of your message
    #[arg(long, default_value = "")]
    pub subject: String,
    /// Your message
    #[arg(long, default_value = "")]
    pub message: String,
}

impl SubmitArgs {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let records = environment::records(environment::store(&config).await?, &config);
        let view = Arc::new(HeadlessFormView::contact_page());
        let form = environment::contact_form(Arc::clone(&view), records, &config)
            .context("Failed to attach the contact form")?;

        let data = ContactFormData {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        };
        for field in ContactField::ALL {
            form.handle(ContactFormEvent::Focus(field));
            view.set_value(field, data.get(field));
            form.handle(ContactFormEvent::Input(field));
            form.handle(ContactFormEvent::Blur(field));
        }

        match form.submit().await {
            SubmitOutcome::Succeeded(record) => {
                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(())
            }
            SubmitOutcome::Rejected(states) => {
                for (field, state) in states.iter() {
                    if let Some(message) = state.message {
                        println!("{field}: {message}");
                    }
                }
                bail!(messages::REJECTED)
            }
            SubmitOutcome::Failed => bail!(messages::FAILED),
            SubmitOutcome::Ignored => bail!("Another submission is still in progress"),
        }
    }
}
