//! Tag kinds and their schema tables
//!
//!     Every node in an ssml tree has exactly one [`TagKind`]. The kind drives
//!     all schema decisions through fixed, kind-indexed tables rather than
//!     instance-level configuration:
//!
//!         - whether the kind is a container or a leaf
//!         - which child kinds a container may own ([`AllowedChildren`])
//!         - which attributes serialize, and in which order
//!
//!     `Speak` is the sole wildcard container and accepts any child kind.
//!     Leaves carry an empty allowed-child set, so the mutation API rejects
//!     insertions under them with the same schema check it applies everywhere.
//!
//! Attribute Tables
//!
//!     The serialization tables map the normalized attribute key (as stored on
//!     the node, `xml:` prefix stripped) to the name emitted in markup. The
//!     identifier renders as `xml:id` and the language as `xml:lang`; all other
//!     attributes render under their own name. Attributes absent from a kind's
//!     table never serialize, even when present on the node.

/// The closed set of node kinds in the narrated-audio ssml subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Speak,
    Media,
    Audio,
    Seq,
    Par,
    Prosody,
    Text,
    Break,
}

/// The allowed-child set of a container kind.
///
/// `Any` is the wildcard used by `Speak`. Leaves use an empty `Kinds` slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedChildren {
    Any,
    Kinds(&'static [TagKind]),
}

/// One entry in a kind's attribute serialization table:
/// (normalized key on the node, name emitted in markup).
pub type AttrSpec = (&'static str, &'static str);

const SPEAK_ATTRS: &[AttrSpec] = &[("lang", "xml:lang"), ("id", "xml:id")];
const MEDIA_ATTRS: &[AttrSpec] = &[
    ("begin", "begin"),
    ("id", "xml:id"),
    ("end", "end"),
    ("repeatCount", "repeatCount"),
    ("repeatDur", "repeatDur"),
    ("soundLevel", "soundLevel"),
    ("fadeInDur", "fadeInDur"),
    ("fadeOutDur", "fadeOutDur"),
];
const AUDIO_ATTRS: &[AttrSpec] = &[
    ("src", "src"),
    ("id", "xml:id"),
    ("clipBegin", "clipBegin"),
    ("clipEnd", "clipEnd"),
    ("speed", "speed"),
    ("repeatCount", "repeatCount"),
    ("repeatDur", "repeatDur"),
    ("soundLevel", "soundLevel"),
];
const SEQ_ATTRS: &[AttrSpec] = &[("id", "xml:id")];
const PAR_ATTRS: &[AttrSpec] = &[("id", "xml:id")];
const PROSODY_ATTRS: &[AttrSpec] = &[
    ("id", "xml:id"),
    ("rate", "rate"),
    ("pitch", "pitch"),
    ("volume", "volume"),
    ("duration", "duration"),
];
const BREAK_ATTRS: &[AttrSpec] = &[("time", "time"), ("strength", "strength"), ("id", "xml:id")];
const TEXT_ATTRS: &[AttrSpec] = &[];

const MEDIA_CHILDREN: &[TagKind] = &[TagKind::Speak, TagKind::Audio];
const AUDIO_CHILDREN: &[TagKind] = &[TagKind::Text];
const SEQ_CHILDREN: &[TagKind] = &[TagKind::Seq, TagKind::Par, TagKind::Media];
const PAR_CHILDREN: &[TagKind] = &[TagKind::Seq, TagKind::Par, TagKind::Media];
const PROSODY_CHILDREN: &[TagKind] = &[TagKind::Text];
const LEAF_CHILDREN: &[TagKind] = &[];

impl TagKind {
    /// The lower-case tag name, also used for case-insensitive lookup in
    /// traversal searches. `Text` answers to `"text"` even though it has no
    /// markup tag of its own.
    pub fn tag_name(self) -> &'static str {
        match self {
            TagKind::Speak => "speak",
            TagKind::Media => "media",
            TagKind::Audio => "audio",
            TagKind::Seq => "seq",
            TagKind::Par => "par",
            TagKind::Prosody => "prosody",
            TagKind::Text => "text",
            TagKind::Break => "break",
        }
    }

    /// Look up a markup tag name. Tag names are case-sensitive lower-case in
    /// the wire format, so this performs no folding. `Text` is not a markup
    /// tag and is never returned.
    pub fn from_name(name: &str) -> Option<TagKind> {
        match name {
            "speak" => Some(TagKind::Speak),
            "media" => Some(TagKind::Media),
            "audio" => Some(TagKind::Audio),
            "seq" => Some(TagKind::Seq),
            "par" => Some(TagKind::Par),
            "prosody" => Some(TagKind::Prosody),
            "break" => Some(TagKind::Break),
            _ => None,
        }
    }

    pub fn is_container(self) -> bool {
        !matches!(self, TagKind::Text | TagKind::Break)
    }

    /// The fixed allowed-child set for this kind.
    pub fn allowed_children(self) -> AllowedChildren {
        match self {
            TagKind::Speak => AllowedChildren::Any,
            TagKind::Media => AllowedChildren::Kinds(MEDIA_CHILDREN),
            TagKind::Audio => AllowedChildren::Kinds(AUDIO_CHILDREN),
            TagKind::Seq => AllowedChildren::Kinds(SEQ_CHILDREN),
            TagKind::Par => AllowedChildren::Kinds(PAR_CHILDREN),
            TagKind::Prosody => AllowedChildren::Kinds(PROSODY_CHILDREN),
            TagKind::Text | TagKind::Break => AllowedChildren::Kinds(LEAF_CHILDREN),
        }
    }

    /// Whether a child of kind `child` may be inserted under this kind.
    pub fn allows_child(self, child: TagKind) -> bool {
        match self.allowed_children() {
            AllowedChildren::Any => true,
            AllowedChildren::Kinds(kinds) => kinds.contains(&child),
        }
    }

    /// The attribute serialization table for this kind, in emission order.
    pub fn attribute_order(self) -> &'static [AttrSpec] {
        match self {
            TagKind::Speak => SPEAK_ATTRS,
            TagKind::Media => MEDIA_ATTRS,
            TagKind::Audio => AUDIO_ATTRS,
            TagKind::Seq => SEQ_ATTRS,
            TagKind::Par => PAR_ATTRS,
            TagKind::Prosody => PROSODY_ATTRS,
            TagKind::Text => TEXT_ATTRS,
            TagKind::Break => BREAK_ATTRS,
        }
    }

    /// All kinds, in a fixed order. Used by schema-matrix tests.
    pub fn all() -> &'static [TagKind] {
        &[
            TagKind::Speak,
            TagKind::Media,
            TagKind::Audio,
            TagKind::Seq,
            TagKind::Par,
            TagKind::Prosody,
            TagKind::Text,
            TagKind::Break,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_partition() {
        let containers: Vec<_> = TagKind::all()
            .iter()
            .filter(|k| k.is_container())
            .collect();
        assert_eq!(containers.len(), 6);
        assert!(!TagKind::Text.is_container());
        assert!(!TagKind::Break.is_container());
    }

    #[test]
    fn test_speak_is_the_only_wildcard() {
        for kind in TagKind::all() {
            let is_any = matches!(kind.allowed_children(), AllowedChildren::Any);
            assert_eq!(is_any, *kind == TagKind::Speak);
        }
    }

    #[test]
    fn test_leaves_reject_all_children() {
        for child in TagKind::all() {
            assert!(!TagKind::Text.allows_child(*child));
            assert!(!TagKind::Break.allows_child(*child));
        }
    }

    #[test]
    fn test_from_name_rejects_text_and_unknown() {
        assert_eq!(TagKind::from_name("text"), None);
        assert_eq!(TagKind::from_name("SPEAK"), None);
        assert_eq!(TagKind::from_name("bogus"), None);
        assert_eq!(TagKind::from_name("par"), Some(TagKind::Par));
    }

    #[test]
    fn test_identifier_renders_with_xml_prefix() {
        for kind in TagKind::all() {
            for (key, rendered) in kind.attribute_order() {
                if *key == "id" {
                    assert_eq!(*rendered, "xml:id");
                }
                if *key == "lang" {
                    assert_eq!(*rendered, "xml:lang");
                }
            }
        }
    }
}
