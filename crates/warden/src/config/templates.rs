use handlebars::Handlebars;
use serde_json::Value;

use crate::{Error, Result};

lazy_static! {
    static ref HANDLEBARS: Handlebars<'static> = {
        // Emails are sent as plain text
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    };
}

/// Email template
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Template {
    /// Title of the email
    pub title: String,
    /// Plain text version of this email
    pub text: String,
    /// URL to redirect people to from the email
    ///
    /// Use `{{url}}` to fill this field.
    ///
    /// Any given URL will be suffixed with the unique token.
    ///
    /// e.g. `https://example.com?t=` becomes `https://example.com?t=UNIQUE_CODE`
    pub url: String,
}

/// Email templates
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Templates {
    /// Template for email verification
    pub verify: Template,
    /// Template for password reset
    pub reset: Template,
}

impl Default for Templates {
    fn default() -> Templates {
        Templates {
            verify: Template {
                title: "Confirm Email".into(),
                text: "Hello {{full_name}},\n\nConfirm your email address by visiting {{url}}\n\nYour confirmation code is {{token}}".into(),
                url: "http://localhost/account/confirm?token=".into(),
            },
            reset: Template {
                title: "Reset Password".into(),
                text: "Hello {{full_name}},\n\nReset your password by visiting {{url}}\n\nYour reset code is {{token}}".into(),
                url: "http://localhost/account/reset?token=".into(),
            },
        }
    }
}

/// Rendered email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub subject: String,
    pub body: String,
}

impl Template {
    /// Render this template for a given token
    ///
    /// `variables` must be a JSON object, `url` and `token` are added to it.
    pub fn render(&self, token: &str, mut variables: Value) -> Result<RenderedTemplate> {
        if let Value::Object(map) = &mut variables {
            map.insert("url".into(), json!(format!("{}{}", self.url, token)));
            map.insert("token".into(), json!(token));
        } else {
            return Err(Error::RenderFail);
        }

        Ok(RenderedTemplate {
            subject: HANDLEBARS
                .render_template(&self.title, &variables)
                .map_err(|_| Error::RenderFail)?,
            body: HANDLEBARS
                .render_template(&self.text, &variables)
                .map_err(|_| Error::RenderFail)?,
        })
    }
}
