use nalgebra::Point2;
use std::fmt;

/// Arrow semantics of a reaction.
///
/// On the wire this is the `type` attribute plus, for the biased
/// reversible forms, a `bias` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReactionType {
    #[default]
    Normal,
    Reversible,
    ReversibleBiasedForward,
    ReversibleBiasedReverse,
    Blocked,
    Resonance,
    Retrosynthetic,
}

impl ReactionType {
    /// Decodes the `type`/`bias` attribute pair. Unknown values fall back
    /// to [`ReactionType::Normal`]; the caller records the diagnostic.
    pub fn from_attributes(kind: Option<&str>, bias: Option<&str>) -> Option<Self> {
        match kind {
            None | Some("normal") => Some(Self::Normal),
            Some("reversible") => match bias {
                None => Some(Self::Reversible),
                Some("forward") => Some(Self::ReversibleBiasedForward),
                Some("reverse") => Some(Self::ReversibleBiasedReverse),
                Some(_) => None,
            },
            Some("blocked") => Some(Self::Blocked),
            Some("resonance") => Some(Self::Resonance),
            Some("retrosynthetic") => Some(Self::Retrosynthetic),
            Some(_) => None,
        }
    }

    /// The `type` attribute value; `None` means the attribute is omitted.
    pub fn type_attribute(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Reversible
            | Self::ReversibleBiasedForward
            | Self::ReversibleBiasedReverse => Some("reversible"),
            Self::Blocked => Some("blocked"),
            Self::Resonance => Some("resonance"),
            Self::Retrosynthetic => Some("retrosynthetic"),
        }
    }

    /// The `bias` attribute value; only biased reversible arrows carry one.
    pub fn bias_attribute(self) -> Option<&'static str> {
        match self {
            Self::ReversibleBiasedForward => Some("forward"),
            Self::ReversibleBiasedReverse => Some("reverse"),
            _ => None,
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Reversible => "reversible",
            Self::ReversibleBiasedForward => "reversible (forward)",
            Self::ReversibleBiasedReverse => "reversible (reverse)",
            Self::Blocked => "blocked",
            Self::Resonance => "resonance",
            Self::Retrosynthetic => "retrosynthetic",
        })
    }
}

/// A participant slot in a reaction: a role id (`"rr1"`, `"rp2"`) mapped to
/// the string id of a top-level molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: Option<String>,
    pub molecule_ref: String,
}

/// One reaction arrow with its participants.
///
/// `reagent_text` and `conditions_text` hold rich-text markup captured
/// verbatim from the source document; the model never interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub id: Option<String>,
    pub tail: Point2<f64>,
    pub head: Point2<f64>,
    pub reaction_type: ReactionType,
    pub reagent_text: Option<String>,
    pub conditions_text: Option<String>,
    pub reactants: Vec<Participant>,
    pub products: Vec<Participant>,
}

impl Reaction {
    pub fn new(tail: Point2<f64>, head: Point2<f64>) -> Self {
        Self {
            id: None,
            tail,
            head,
            reaction_type: ReactionType::default(),
            reagent_text: None,
            conditions_text: None,
            reactants: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Rewrites participant refs after a molecule relabel. `old` is the
    /// molecule id before relabeling.
    pub fn remap_participant(&mut self, old: &str, new: &str) {
        for participant in self.reactants.iter_mut().chain(self.products.iter_mut()) {
            if participant.molecule_ref == old {
                participant.molecule_ref = new.to_string();
            }
        }
    }
}

/// An ordered collection of reactions owned by a model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReactionScheme {
    pub id: Option<String>,
    pub reactions: Vec<Reaction>,
}

impl ReactionScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reaction_by_id(&self, id: &str) -> Option<&Reaction> {
        self.reactions
            .iter()
            .find(|reaction| reaction.id.as_deref() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_attribute_round_trips_every_variant() {
        for reaction_type in [
            ReactionType::Normal,
            ReactionType::Reversible,
            ReactionType::ReversibleBiasedForward,
            ReactionType::ReversibleBiasedReverse,
            ReactionType::Blocked,
            ReactionType::Resonance,
            ReactionType::Retrosynthetic,
        ] {
            let decoded = ReactionType::from_attributes(
                reaction_type.type_attribute(),
                reaction_type.bias_attribute(),
            );
            assert_eq!(decoded, Some(reaction_type));
        }
    }

    #[test]
    fn missing_type_attribute_means_normal() {
        assert_eq!(
            ReactionType::from_attributes(None, None),
            Some(ReactionType::Normal)
        );
    }

    #[test]
    fn unknown_values_are_rejected_for_the_caller_to_report() {
        assert_eq!(ReactionType::from_attributes(Some("sideways"), None), None);
        assert_eq!(
            ReactionType::from_attributes(Some("reversible"), Some("upward")),
            None
        );
    }

    #[test]
    fn bias_is_ignored_for_unbiased_types() {
        // A stray bias on a non-reversible arrow is not an error.
        assert_eq!(
            ReactionType::from_attributes(Some("blocked"), Some("forward")),
            Some(ReactionType::Blocked)
        );
    }

    #[test]
    fn remap_participant_rewrites_both_sides() {
        let mut reaction = Reaction::new(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0));
        reaction.reactants.push(Participant {
            id: None,
            molecule_ref: "m9".to_string(),
        });
        reaction.products.push(Participant {
            id: None,
            molecule_ref: "m9".to_string(),
        });
        reaction.products.push(Participant {
            id: None,
            molecule_ref: "m2".to_string(),
        });

        reaction.remap_participant("m9", "m1");

        assert_eq!(reaction.reactants[0].molecule_ref, "m1");
        assert_eq!(reaction.products[0].molecule_ref, "m1");
        assert_eq!(reaction.products[1].molecule_ref, "m2");
    }

    #[test]
    fn scheme_lookup_by_id() {
        let mut scheme = ReactionScheme::new();
        let mut reaction = Reaction::new(Point2::origin(), Point2::new(1.0, 0.0));
        reaction.id = Some("r1".to_string());
        scheme.reactions.push(reaction);

        assert!(scheme.reaction_by_id("r1").is_some());
        assert!(scheme.reaction_by_id("r2").is_none());
    }
}
