//! Equivalent awakening skills.
//!
//! Upgraded awakenings (a "+" skill, a triple row enhance) stand for several
//! copies of a base awakening. Numeric filters such as "at least 4 skill
//! boosts" count them through [`count_awakenings`].

described_enum! {
    /// Awakening skills that take part in equivalence.
    pub enum AwokenSkill {
        BindRes => "Resistance-Bind",
        BindResPlus => "Resistance-Bind+",
        Unbindable => "Unbindable",
        ExtMove => "Extend Time",
        ExtMovePlus => "Extend Time+",
        SkillBoost => "Skill Boost",
        SkillBoostPlus => "Skill Boost+",
        SkillCharge => "Skill Charge",
        SkillChargePlus => "Skill Charge+",
        AutoHeal => "Auto-Recover",
        EnhancedRed => "Enhanced Fire Orbs",
        EnhancedRedPlus => "Enhanced Fire Orbs+",
        EnhancedBlue => "Enhanced Water Orbs",
        EnhancedBluePlus => "Enhanced Water Orbs+",
        EnhancedGreen => "Enhanced Wood Orbs",
        EnhancedGreenPlus => "Enhanced Wood Orbs+",
        EnhancedLight => "Enhanced Light Orbs",
        EnhancedLightPlus => "Enhanced Light Orbs+",
        EnhancedDark => "Enhanced Dark Orbs",
        EnhancedDarkPlus => "Enhanced Dark Orbs+",
        EnhCombo7c => "Enhanced Combos",
        EnhCombo7cPlus => "Enhanced Combos+",
        Vdp => "Enhanced Damage Pattern",
        VdpPlus => "Enhanced Damage Pattern+",
        CrossAttack => "Cross Attack",
        CrossAttackPlus => "Cross Attack+",
        EnhCombo10c => "Super Enhanced Combos",
        EnhCombo10cPlus => "Super Enhanced Combos+",
        Attr3Boost => "Tri-Attribute Boost",
        Attr3BoostPlus => "Tri-Attribute Boost+",
        Attr4Boost => "Quad-Attribute Boost",
        Attr4BoostPlus => "Quad-Attribute Boost+",
        Attr5Boost => "Penta-Attribute Boost",
        Attr5BoostPlus => "Penta-Attribute Boost+",
        RedRow => "Enhanced Fire Att.",
        RedRowX3 => "Enhanced Fire Att. x3",
        BlueRow => "Enhanced Water Att.",
        BlueRowX3 => "Enhanced Water Att. x3",
        GreenRow => "Enhanced Wood Att.",
        GreenRowX3 => "Enhanced Wood Att. x3",
        LightRow => "Enhanced Light Att.",
        LightRowX3 => "Enhanced Light Att. x3",
        DarkRow => "Enhanced Dark Att.",
        DarkRowX3 => "Enhanced Dark Att. x3",
        RedComboCount => "Fire Combo Count",
        RedComboCountPlus => "Fire Combo Count+",
        BlueComboCount => "Water Combo Count",
        BlueComboCountPlus => "Water Combo Count+",
        GreenComboCount => "Wood Combo Count",
        GreenComboCountPlus => "Wood Combo Count+",
        LightComboCount => "Light Combo Count",
        LightComboCountPlus => "Light Combo Count+",
        DarkComboCount => "Dark Combo Count",
        DarkComboCountPlus => "Dark Combo Count+",
    }
}

/// An upgraded awakening expressed in terms of its base.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EquivalentAwakening {
    /// The base awakening.
    pub awoken_skill: AwokenSkill,
    /// How many base awakenings the upgraded one counts as.
    pub value: u32,
}

const fn equiv(awoken_skill: AwokenSkill, value: u32) -> Option<EquivalentAwakening> {
    Some(EquivalentAwakening { awoken_skill, value })
}

/// Returns the base awakening and multiplier of an upgraded awakening, or
/// `None` for skills that are not upgrades.
#[must_use]
pub const fn equivalent_awakening(skill: AwokenSkill) -> Option<EquivalentAwakening> {
    use AwokenSkill as A;
    match skill {
        A::Unbindable | A::BindResPlus => equiv(A::BindRes, 2),
        A::ExtMovePlus => equiv(A::ExtMove, 2),
        A::SkillBoostPlus => equiv(A::SkillBoost, 2),
        A::SkillChargePlus => equiv(A::SkillCharge, 2),
        A::EnhancedRedPlus => equiv(A::EnhancedRed, 2),
        A::EnhancedBluePlus => equiv(A::EnhancedBlue, 2),
        A::EnhancedGreenPlus => equiv(A::EnhancedGreen, 2),
        A::EnhancedLightPlus => equiv(A::EnhancedLight, 2),
        A::EnhancedDarkPlus => equiv(A::EnhancedDark, 2),
        A::EnhCombo7cPlus => equiv(A::EnhCombo7c, 2),
        A::VdpPlus => equiv(A::Vdp, 2),
        A::CrossAttackPlus => equiv(A::CrossAttack, 2),
        A::EnhCombo10cPlus => equiv(A::EnhCombo10c, 2),
        A::Attr3BoostPlus => equiv(A::Attr3Boost, 2),
        A::Attr4BoostPlus => equiv(A::Attr4Boost, 2),
        A::Attr5BoostPlus => equiv(A::Attr5Boost, 2),
        A::RedRowX3 => equiv(A::RedRow, 3),
        A::BlueRowX3 => equiv(A::BlueRow, 3),
        A::GreenRowX3 => equiv(A::GreenRow, 3),
        A::LightRowX3 => equiv(A::LightRow, 3),
        A::DarkRowX3 => equiv(A::DarkRow, 3),
        A::RedComboCountPlus => equiv(A::RedComboCount, 2),
        A::BlueComboCountPlus => equiv(A::BlueComboCount, 2),
        A::GreenComboCountPlus => equiv(A::GreenComboCount, 2),
        A::LightComboCountPlus => equiv(A::LightComboCount, 2),
        A::DarkComboCountPlus => equiv(A::DarkComboCount, 2),
        _ => None,
    }
}

/// Counts occurrences of `target` in `skills`, counting each upgraded
/// awakening whose base is `target` as its multiplier.
#[must_use]
pub fn count_awakenings(skills: &[AwokenSkill], target: AwokenSkill) -> u32 {
    skills
        .iter()
        .map(|&skill| {
            if skill == target {
                1
            } else {
                match equivalent_awakening(skill) {
                    Some(eq) if eq.awoken_skill == target => eq.value,
                    _ => 0,
                }
            }
        })
        .sum()
}
