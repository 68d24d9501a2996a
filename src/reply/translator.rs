//! Reply translator
//!
//! Looks up the template for a reply, substitutes its placeholders and
//! packages the result as a `Reply`.

use log::debug;

use crate::client::SessionView;
use crate::protocol::Request;
use crate::reply::Reply;
use crate::server::ServerContext;
use crate::template::{VariableResolver, scan};

/// Builds the reply for `code`.
///
/// The template is selected by code, `sub_id` and the session language.
/// Without a template the message is empty; `basic_message` only appears
/// where the template references `{output.msg}`.
pub fn translate(
    session: &dyn SessionView,
    request: Option<&Request>,
    context: &ServerContext,
    code: u16,
    sub_id: Option<&str>,
    basic_message: &str,
) -> Reply {
    let template = context.catalog().message(code, sub_id, session.language());
    if template.is_none() {
        debug!("No reply template for {} (sub id {:?})", code, sub_id);
    }

    let resolver = VariableResolver::new(
        code,
        basic_message,
        session,
        request,
        context.statistics(),
    );
    translate_template(template.as_deref(), &resolver)
}

/// Renders `template` with `resolver` into a reply carrying the resolver's code.
pub fn translate_template(template: Option<&str>, resolver: &VariableResolver<'_>) -> Reply {
    let message = scan(template.unwrap_or(""), |name| resolver.resolve(name));
    Reply::new(resolver.code(), message)
}
