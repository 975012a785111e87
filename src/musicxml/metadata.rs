//! Score-header metadata: reading the title and composer, and replacing the
//! whole metadata block.

use super::score::Score;
use super::tree::{XmlElement, XmlNode};

/// Credits that render metadata on the page; stale once metadata is replaced
const METADATA_CREDIT_TYPES: [&str; 6] = ["title", "subtitle", "composer", "arranger", "lyricist", "rights"];

impl Score {
    /// Title of the work: `work/work-title`, else `movement-title`
    ///
    /// Whitespace is trimmed and an empty title counts as absent.
    pub fn title(&self) -> Option<String> {
        let root = self.root();

        let work_title = root
            .child("work")
            .and_then(|work| work.child_text("work-title"))
            .filter(|t| !t.is_empty());

        work_title.or_else(|| root.child_text("movement-title").filter(|t| !t.is_empty()))
    }

    /// Composer from `identification/creator[@type="composer"]`
    pub fn composer(&self) -> Option<String> {
        self.root()
            .child("identification")?
            .elements()
            .filter(|e| e.name == "creator" && e.attribute("type") == Some("composer"))
            .filter_map(|e| e.text())
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
    }

    /// Replace all metadata with a title and a composer
    ///
    /// Work and movement fields, creators, rights, source and relation
    /// entries and metadata credits are dropped; only `identification/encoding`
    /// survives. The new header is written in schema order (work,
    /// movement-title, identification) ahead of `defaults` and `part-list`.
    pub fn with_metadata(mut self, title: &str, composer: &str) -> Self {
        let root = self.root_mut();

        root.remove_elements(|e| matches!(e.name.as_str(), "work" | "movement-number" | "movement-title"));
        root.remove_elements(is_metadata_credit);

        let encoding = root
            .child("identification")
            .and_then(|identification| identification.child("encoding"))
            .cloned();
        root.remove_elements(|e| e.name == "identification");

        let mut work = XmlElement::new("work");
        work.children
            .push(XmlNode::Element(XmlElement::with_text("work-title", title)));

        let mut identification = XmlElement::new("identification");
        identification.children.push(XmlNode::Element(
            XmlElement::with_text("creator", composer).with_attribute("type", "composer"),
        ));
        if let Some(encoding) = encoding {
            identification.children.push(XmlNode::Element(encoding));
        }

        let header = [work, XmlElement::with_text("movement-title", title), identification];
        for (index, element) in header.into_iter().enumerate() {
            root.children.insert(index, XmlNode::Element(element));
        }

        self
    }
}

fn is_metadata_credit(element: &XmlElement) -> bool {
    element.name == "credit"
        && element
            .elements()
            .filter(|child| child.name == "credit-type")
            .filter_map(|child| child.text())
            .any(|kind| METADATA_CREDIT_TYPES.contains(&kind.trim()))
}
