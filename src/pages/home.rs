use html_escape::encode_text as text;

use super::{page_title, render_document, PageContext};

pub fn render_home(ctx: &PageContext<'_>) -> String {
    let home = &ctx.dict.pages.home;
    let body = format!(
        r#"<section class="hero">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<a class="btn btn-primary" href="/{locale}/about">{cta}</a>
</section>"#,
        title = text(&home.title),
        subtitle = text(&home.subtitle),
        locale = ctx.locale,
        cta = text(&home.cta),
    );

    render_document(ctx, &page_title(ctx.dict, None), &home.subtitle, &body)
}
