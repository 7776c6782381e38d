//! Canonical tags a search modifier can mean.
//!
//! Tags live in three disjoint domains. [`CanonicalTag`] is their sum and is
//! what the combined alias table resolves to.

use std::fmt;

described_enum! {
    /// Creature type of a monster.
    pub enum CreatureType {
        Evolve => "Evolve",
        Balanced => "Balanced",
        Physical => "Physical",
        Healer => "Healer",
        Dragon => "Dragon",
        God => "God",
        Attacker => "Attacker",
        Devil => "Devil",
        Machine => "Machine",
        Awoken => "Awoken",
        Enhance => "Enhance",
        Vendor => "Vendor",
    }
}

described_enum! {
    /// Evolution stage of a monster.
    pub enum EvoStage {
        Base => "Base",
        Evolved => "Evolved",
        Ultimate => "Ultimate",
        SuperUltimate => "Super Ultimate",
        Equip => "Equip",
        TransformBase => "Base Transform",
        Transform => "Transform",
        Awakened => "Awakened",
        MegaAwakened => "Mega Awakened",
        Reincarnated => "Reincarnated",
        SuperReincarnated => "Super Reincarnated",
        Pixel => "Pixel",
        NonPixel => "Nonpixel",
        Chibi => "Chibi",
    }
}

described_enum! {
    /// Miscellaneous monster attribute.
    pub enum MiscModifier {
        Story => "Story",
        Farmable => "Farmable",
        Tradeable => "Tradeable",
        InRem => "In REM",
        InPem => "In PEM",
        InAdPem => "In AdPEM",
        EvoInAdPem => "This evo is in AdPEM",
        Mp => "MP",
        InJp => "In JP Server",
        OnlyJp => "Only in JP Server",
        InNa => "In NA Server",
        OnlyNa => "Only in NA Server",
        Regular => "Metaseries: Regular",
        Event => "Metaseries: Event",
        Seasonal => "Metaseries: Seasonal",
        Collab => "Metaseries: Collab",
        Newest => "Newest monster in series",
        OrbSkin => "Grants an orb skin",
        Bgm => "Grants a BGM",
        Media => "Grants a form of media",
        Animated => "Animated monster",
        MedalExchange => "Exchangeable for vendor mats",
        BlackMedal => "Exchangeable for black medals",
        CurrentExchangeJp => "Currently exchangeable in JP",
        CurrentExchangeNa => "Currently exchangeable in NA",
        CurrentExchangeKr => "Currently exchangeable in KR",
        PermanentExchange => "Permanently exchangeable",
        TemporaryExchange => "Temporarily exchangeable at some point in time",
        HasEvoGem => "Has an evo gem",
        GfeShop => "GFE exchangeable",
        GfeShop6Star => "6* GFE exchangeable",
        GfeShop7Star => "7* GFE exchangeable",
        NoNullAttribute => "Has no null attributes",
    }
}

/// The domain a canonical tag belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagDomain {
    /// [`CreatureType`] tags.
    CreatureType,
    /// [`EvoStage`] tags.
    EvoStage,
    /// [`MiscModifier`] tags.
    Misc,
}

impl fmt::Display for TagDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CreatureType => "type",
            Self::EvoStage => "evo",
            Self::Misc => "misc",
        })
    }
}

/// A canonical tag from any of the three domains.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CanonicalTag {
    /// A creature type.
    CreatureType(CreatureType),
    /// An evolution stage.
    EvoStage(EvoStage),
    /// A miscellaneous attribute.
    Misc(MiscModifier),
}

impl CanonicalTag {
    /// Returns the domain this tag belongs to.
    #[must_use]
    pub const fn domain(self) -> TagDomain {
        match self {
            Self::CreatureType(_) => TagDomain::CreatureType,
            Self::EvoStage(_) => TagDomain::EvoStage,
            Self::Misc(_) => TagDomain::Misc,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CreatureType(t) => t.description(),
            Self::EvoStage(t) => t.description(),
            Self::Misc(t) => t.description(),
        }
    }

    /// Returns the creature type, if this is one.
    #[must_use]
    pub const fn as_creature_type(self) -> Option<CreatureType> {
        match self {
            Self::CreatureType(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the evolution stage, if this is one.
    #[must_use]
    pub const fn as_evo_stage(self) -> Option<EvoStage> {
        match self {
            Self::EvoStage(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the miscellaneous modifier, if this is one.
    #[must_use]
    pub const fn as_misc(self) -> Option<MiscModifier> {
        match self {
            Self::Misc(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain(), self.description())
    }
}

impl From<CreatureType> for CanonicalTag {
    fn from(t: CreatureType) -> Self {
        Self::CreatureType(t)
    }
}

impl From<EvoStage> for CanonicalTag {
    fn from(t: EvoStage) -> Self {
        Self::EvoStage(t)
    }
}

impl From<MiscModifier> for CanonicalTag {
    fn from(t: MiscModifier) -> Self {
        Self::Misc(t)
    }
}
