use crate::error::ToolResult;
use serde::Serialize;
use tera::{Context, Tera};

/// Renders `template` against the fields of `vars`.
///
/// Placeholders use Tera syntax (`{{ name }}`). A placeholder with no
/// matching variable is an error.
pub fn exec_template<T>(template: &str, vars: &T) -> ToolResult<String>
where
    T: Serialize + ?Sized,
{
    let context = Context::from_serialize(vars)?;
    let rendered = Tera::one_off(template, &context, false).map_err(|e| {
        log::debug!("template render failed: {}", e);
        e
    })?;
    Ok(rendered)
}
