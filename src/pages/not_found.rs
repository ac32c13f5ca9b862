use html_escape::encode_text as text;

use super::{page_title, render_document, PageContext};

pub fn render_not_found(ctx: &PageContext<'_>) -> String {
    let not_found = &ctx.dict.pages.not_found;
    let body = format!(
        r#"<div class="not-found">
<h1>404</h1>
<h2>{title}</h2>
<p>{description}</p>
<a class="btn btn-primary" href="/{locale}">{back_home}</a>
</div>"#,
        title = text(&not_found.title),
        description = text(&not_found.description),
        locale = ctx.locale,
        back_home = text(&not_found.back_home),
    );

    render_document(
        ctx,
        &page_title(ctx.dict, Some(&not_found.title)),
        &not_found.description,
        &body,
    )
}
