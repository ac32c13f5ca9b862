use html_escape::encode_text as text;

use super::{page_title, render_document, PageContext};

pub fn render_about(ctx: &PageContext<'_>) -> String {
    let about = &ctx.dict.pages.about;

    let sections: String = about
        .sections
        .iter()
        .map(|section| {
            format!(
                "<section>\n<h2>{}</h2>\n<p>{}</p>\n</section>\n",
                text(&section.title),
                text(&section.content)
            )
        })
        .collect();

    let values: String = about
        .values
        .iter()
        .map(|value| format!("<li>{}</li>", text(value)))
        .collect();

    let body = format!(
        r#"<div class="page-intro">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
</div>
{sections}<section class="values">
<h2>{values_title}</h2>
<ul>{values}</ul>
</section>"#,
        title = text(&about.title),
        subtitle = text(&about.subtitle),
        values_title = text(&about.values_title),
    );

    render_document(
        ctx,
        &page_title(ctx.dict, Some(&about.title)),
        &about.subtitle,
        &body,
    )
}
