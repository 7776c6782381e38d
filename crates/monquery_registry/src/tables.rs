//! Built-in alias tables for monster search modifiers.
//!
//! These are plain data. Nothing here is validated; [`crate::AliasRegistry`]
//! checks every table when it is built.

use crate::tags::{CreatureType, EvoStage, MiscModifier};

/// Aliases for each creature type.
pub const CREATURE_TYPE_ALIASES: &[(CreatureType, &[&str])] = &[
    (CreatureType::Evolve, &["evolve"]),
    (CreatureType::Balanced, &["balanced", "bal", "balance"]),
    (CreatureType::Physical, &["physical", "phys"]),
    (CreatureType::Healer, &["healer"]),
    (CreatureType::Dragon, &["dragon", "dra"]),
    (CreatureType::God, &["god"]),
    (CreatureType::Attacker, &["attacker", "atk"]),
    (CreatureType::Devil, &["devil", "dv"]),
    (CreatureType::Machine, &["machine", "mech"]),
    (CreatureType::Awoken, &["awokentype", "awotype"]),
    (CreatureType::Enhance, &["enhance", "fodder", "enh"]),
    (CreatureType::Vendor, &["vendor", "redeemable"]),
];

/// Aliases for each evolution stage.
pub const EVO_STAGE_ALIASES: &[(EvoStage, &[&str])] = &[
    (EvoStage::Base, &["base"]),
    (EvoStage::Evolved, &["evo", "evolved"]),
    (EvoStage::Ultimate, &["uvo", "ult", "ultimate", "uevo"]),
    (EvoStage::SuperUltimate, &["uuvo", "uult", "uultimate", "uuevo", "suvo"]),
    (EvoStage::Equip, &["equip", "assist", "eq"]),
    (EvoStage::TransformBase, &["transformbase", "transbase"]),
    (EvoStage::Transform, &["transform", "trans", "transformed", "xf", "xform", "tf"]),
    (EvoStage::Awakened, &["awoken", "awo", "a", "awakened"]),
    (EvoStage::MegaAwakened, &["mega", "mawoken", "mawo", "ma", "megaawoken", "megaawakened"]),
    (EvoStage::Reincarnated, &["revo", "reincarnated", "rv"]),
    (EvoStage::SuperReincarnated, &["srevo", "super", "sr", "superreincarnated"]),
    (EvoStage::Pixel, &["pixel", "p", "dot", "px"]),
    (EvoStage::NonPixel, &["nonpixel", "np"]),
    (EvoStage::Chibi, &["chibi", "mini"]),
];

/// Aliases for each miscellaneous modifier.
pub const MISC_MODIFIER_ALIASES: &[(MiscModifier, &[&str])] = &[
    (MiscModifier::Story, &["story"]),
    (MiscModifier::Farmable, &["farmable"]),
    (MiscModifier::Tradeable, &["tradeable", "tradable"]),
    (MiscModifier::InRem, &["rem"]),
    (MiscModifier::InPem, &["pem"]),
    (MiscModifier::InAdPem, &["adpem"]),
    (MiscModifier::EvoInAdPem, &["invem", "inadpem"]),
    (MiscModifier::Mp, &["mp"]),
    (MiscModifier::InJp, &["injp"]),
    (MiscModifier::InNa, &["inna"]),
    (MiscModifier::OnlyJp, &["jp"]),
    (MiscModifier::OnlyNa, &["na"]),
    (MiscModifier::Regular, &["regular"]),
    (MiscModifier::Event, &["event"]),
    (MiscModifier::Seasonal, &["seasonal"]),
    (MiscModifier::Collab, &["collab"]),
    (MiscModifier::Newest, &["new"]),
    (MiscModifier::OrbSkin, &["orbskin"]),
    (MiscModifier::Bgm, &["bgm"]),
    (MiscModifier::Media, &["media"]),
    (MiscModifier::Animated, &["animated"]),
    (MiscModifier::MedalExchange, &["medal", "shop"]),
    (MiscModifier::BlackMedal, &["blackmedal"]),
    (MiscModifier::CurrentExchangeJp, &["nowshopjp", "shopnowjp"]),
    (MiscModifier::CurrentExchangeNa, &["nowshopna", "shopnowna"]),
    (MiscModifier::CurrentExchangeKr, &["nowshopkr", "shopnowkr"]),
    (MiscModifier::PermanentExchange, &["permshop", "shopperm"]),
    (MiscModifier::TemporaryExchange, &["tempshop", "shoptemp"]),
    (MiscModifier::HasEvoGem, &["hasgem"]),
    (MiscModifier::GfeShop, &["gfeshop"]),
    (MiscModifier::GfeShop6Star, &["6*gfeshop", "gfeshop6*"]),
    (MiscModifier::GfeShop7Star, &["7*gfeshop", "gfeshop7*"]),
    (MiscModifier::NoNullAttribute, &["3ping", "!!!"]),
];

/// Phrases recognized as a unit. Each phrase's words, concatenated, must be
/// a registered alias.
pub const MULTI_WORD_ALIASES: &[&str] = &[
    "super reincarnated",
    "mega awoken",
    "mega awakened",
    "orb skin",
    "black medal",
];

/// Tokens that only count as modifiers when given explicitly, never when
/// they appear in a monster's name.
pub const HAZARDOUS_IN_NAME: &[&str] = &["reincarnated", "awoken", "equip"];

/// Tokens that are also series names and must not be read as modifiers when
/// they refer to the series.
pub const PROBLEMATIC_SERIES: &[&str] = &["sonia", "odin", "metatron", "kali", "fenrir", "sherias"];

/// Modifiers allowed to end a query after the monster name.
pub const LEGAL_END_TOKENS: &[&str] = &["equip", "assist", "eq"];
