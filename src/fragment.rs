use std::fmt;

/// Inline styling of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl FragmentKind {
    /// Whether fragments of this kind carry a destination (href or src).
    pub fn has_destination(self) -> bool {
        matches!(self, FragmentKind::Link | FragmentKind::Image)
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FragmentKind::Plain => "plain",
            FragmentKind::Bold => "bold",
            FragmentKind::Italic => "italic",
            FragmentKind::Code => "code",
            FragmentKind::Link => "link",
            FragmentKind::Image => "image",
        };
        f.write_str(name)
    }
}

/// A typed run of inline text.
///
/// Fragments are never edited in place: a parsing stage replaces a fragment
/// with zero or more new ones. The destination is present exactly for links
/// and images, which the constructors enforce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextFragment {
    text: String,
    kind: FragmentKind,
    destination: Option<String>,
}

impl TextFragment {
    /// A fragment without a destination. `kind` must not be a link or image.
    pub(crate) fn new(text: impl Into<String>, kind: FragmentKind) -> Self {
        assert!(
            !kind.has_destination(),
            "{kind} fragments need a destination"
        );
        Self {
            text: text.into(),
            kind,
            destination: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Italic)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Code)
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: label.into(),
            kind: FragmentKind::Link,
            destination: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: FragmentKind::Image,
            destination: Some(src.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == FragmentKind::Plain
    }
}

impl fmt::Display for TextFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.destination {
            Some(dest) => write!(f, "{}({:?} -> {:?})", self.kind, self.text, dest),
            None => write!(f, "{}({:?})", self.kind, self.text),
        }
    }
}
