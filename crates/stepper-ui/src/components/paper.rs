//! Surface container the stepper renders into.

use yew::prelude::*;
use yew::virtual_dom::VTag;

use crate::logic::{paper_attributes, paper_classes};

/// Surface the stepper renders into.
#[derive(Properties, PartialEq)]
pub struct PaperProps {
    /// Drop the rounded corners.
    #[prop_or_default]
    pub square: bool,
    /// Shadow depth; `0` renders flat.
    #[prop_or(1)]
    pub elevation: u8,
    /// Element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Classes appended after the surface classes.
    #[prop_or_default]
    pub class: Classes,
    /// Extra attributes applied verbatim to the element.
    #[prop_or_default]
    pub attributes: Vec<(&'static str, AttrValue)>,
    /// Surface content.
    #[prop_or_default]
    pub children: Children,
}

/// Render a `div` surface with the composed class and forwarded attributes.
#[function_component(Paper)]
pub fn paper(props: &PaperProps) -> Html {
    let mut node = VTag::new("div");
    let classes = paper_classes(props.square, props.elevation, &props.class);
    for (name, value) in paper_attributes(props.id.as_ref(), &classes, &props.attributes) {
        node.add_attribute(name, value);
    }
    for child in props.children.iter() {
        node.add_child(child);
    }
    node.into()
}
