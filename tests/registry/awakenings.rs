//! Integration tests for equivalent awakening counting.

use monquery_registry::{AwokenSkill, count_awakenings, equivalent_awakening};

#[test]
fn row_enhance_counts_triple() {
    let skills = [AwokenSkill::RedRow, AwokenSkill::RedRowX3, AwokenSkill::BlueRowX3];
    assert_eq!(count_awakenings(&skills, AwokenSkill::RedRow), 4);
    assert_eq!(count_awakenings(&skills, AwokenSkill::BlueRow), 3);
    assert_eq!(count_awakenings(&skills, AwokenSkill::GreenRow), 0);
}

#[test]
fn unbindable_counts_as_two_bind_resists() {
    let eq = equivalent_awakening(AwokenSkill::Unbindable).unwrap();
    assert_eq!(eq.awoken_skill, AwokenSkill::BindRes);
    assert_eq!(eq.value, 2);
}

#[test]
fn every_upgrade_has_a_plain_base() {
    let upgrades = AwokenSkill::ALL
        .iter()
        .filter(|&&s| equivalent_awakening(s).is_some())
        .count();
    assert_eq!(upgrades, 27);
}

#[test]
fn empty_skill_list_counts_zero() {
    assert_eq!(count_awakenings(&[], AwokenSkill::SkillBoost), 0);
}

#[test]
fn descriptions_are_readable() {
    assert_eq!(format!("{}", AwokenSkill::SkillBoostPlus), "Skill Boost+");
    assert_eq!(AwokenSkill::DarkRowX3.description(), "Enhanced Dark Att. x3");
}
