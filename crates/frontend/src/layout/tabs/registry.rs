//! Content registry - единственное место, где `ContentBlock` превращается во View

use contracts::ContentBlock;
use leptos::prelude::*;

/// Рендерит содержимое группы блок за блоком.
pub fn render_group_content(blocks: &[ContentBlock]) -> AnyView {
    blocks
        .iter()
        .cloned()
        .map(render_block)
        .collect_view()
        .into_any()
}

fn render_block(block: ContentBlock) -> AnyView {
    match block {
        ContentBlock::Heading { text } => view! { <h3>{text}</h3> }.into_any(),
        ContentBlock::Paragraph { text } => view! { <p>{text}</p> }.into_any(),
        ContentBlock::List { items } => view! {
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}
