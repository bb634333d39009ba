use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use super::metadata::Images;

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render a markdown body to HTML.
///
/// An image whose destination names an entry in `images` with a `src`
/// attribute is pointed at that `src`.
pub fn to_html(body: &str, images: &Images) -> String {
    let parser = Parser::new_ext(body, options()).map(|event| match event {
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: resolve_image(dest_url, images),
            title,
            id,
        }),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

fn resolve_image<'a>(dest_url: CowStr<'a>, images: &Images) -> CowStr<'a> {
    match images.get(&*dest_url).and_then(|attrs| attrs.get("src")) {
        Some(src) => CowStr::from(src.clone()),
        None => dest_url,
    }
}

/// Visible text of the rendered body.
///
/// Markup, HTML tags and image alt text are dropped, text between raw HTML
/// tags is kept; block boundaries become single spaces.
pub fn to_plain_text(body: &str) -> String {
    let mut buffer = String::with_capacity(body.len());
    let mut in_image = 0usize;
    let mut in_tag = false;

    for event in Parser::new_ext(body, options()) {
        match event {
            Event::Start(Tag::Image { .. }) => in_image += 1,
            Event::End(TagEnd::Image) => in_image = in_image.saturating_sub(1),
            Event::Text(text) | Event::Code(text) if in_image == 0 => buffer.push_str(&text),
            Event::Html(raw) | Event::InlineHtml(raw) => {
                push_untagged(&raw, &mut in_tag, &mut buffer)
            }
            Event::SoftBreak | Event::HardBreak | Event::Rule => buffer.push(' '),
            Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link) => {}
            Event::End(_) => buffer.push(' '),
            _ => {}
        }
    }

    buffer.split_whitespace().collect::<Vec<_>>().join(" ")
}

// Tags may span several HTML events, so `in_tag` carries over between calls.
fn push_untagged(raw: &str, in_tag: &mut bool, buffer: &mut String) {
    for c in raw.chars() {
        match c {
            '<' if !*in_tag => *in_tag = true,
            '>' if *in_tag => *in_tag = false,
            _ if !*in_tag => buffer.push(c),
            _ => {}
        }
    }
}
