//! Helpers for reading `roxmltree` nodes while building an [`Element`] tree.
//!
//! [`Element`]: super::Element

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use congresso_senado::xml::get_tag_name;
///
/// let xml = r#"<root><Parlamentar>text</Parlamentar></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let child = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(child), "Parlamentar");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the direct text of a node, trimmed. Whitespace-only text is `None`.
pub fn get_text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Get all element children of a node.
///
/// Excludes text nodes, comments and processing instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:child/></ns:root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_get_text() {
        let xml = r#"<root>  trimmed text  </root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_text(doc.root_element()), Some("trimmed text".to_string()));
    }

    #[test]
    fn test_get_text_whitespace_only() {
        let xml = "<root>\n   <child/>\n</root>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_text(doc.root_element()), None);
    }

    #[test]
    fn test_element_children() {
        let xml = r#"<root>text<child1/><!-- note -->more<child2/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let children: Vec<_> = element_children(doc.root_element()).collect();
        assert_eq!(children.len(), 2);
    }
}
