#[cfg(test)]
mod tests {
    use anc_register::models::delivery::DeliveryOutcome;
    use anc_register::models::types::{BirthWeightClass, InfantSex, InfantStatus, MotherStatus};
    use anc_register::utils::test_utils::fixed_today;

    #[test]
    fn test_birth_weight_classification_cutoffs() {
        assert_eq!(BirthWeightClass::from_grams(1499), BirthWeightClass::VeryLowBirthWeight);
        assert_eq!(BirthWeightClass::from_grams(1500), BirthWeightClass::LowBirthWeight);
        assert_eq!(BirthWeightClass::from_grams(2499), BirthWeightClass::LowBirthWeight);
        assert_eq!(BirthWeightClass::from_grams(2500), BirthWeightClass::Normal);
        assert_eq!(BirthWeightClass::from_grams(3400), BirthWeightClass::Normal);
    }

    #[test]
    fn test_outcome_derives_classification_from_weight() {
        let outcome = DeliveryOutcome::new(
            "birth-1".to_string(),
            fixed_today(),
            InfantSex::Female,
            2300,
            47,
        );

        assert_eq!(outcome.classification, BirthWeightClass::LowBirthWeight);
        assert_eq!(outcome.mother_status, MotherStatus::Healthy);
        assert_eq!(outcome.infant_status, InfantStatus::AliveWell);
    }

    #[test]
    fn test_outcome_builder() {
        let outcome = DeliveryOutcome::new(
            "birth-2".to_string(),
            fixed_today(),
            InfantSex::Male,
            3100,
            50,
        )
        .with_infant_name("Muhammad Yusuf".to_string())
        .with_statuses(MotherStatus::Complication, InfantStatus::AliveNeedsCare)
        .with_notes("Persalinan lama".to_string());

        assert_eq!(outcome.infant_name, "Muhammad Yusuf");
        assert_eq!(outcome.mother_status, MotherStatus::Complication);
        assert_eq!(outcome.infant_status, InfantStatus::AliveNeedsCare);
        assert_eq!(outcome.classification, BirthWeightClass::Normal);
    }

    #[test]
    fn test_classification_display_codes() {
        assert_eq!(BirthWeightClass::Normal.to_string(), "NORMAL");
        assert_eq!(BirthWeightClass::LowBirthWeight.to_string(), "BBLR");
        assert_eq!(BirthWeightClass::VeryLowBirthWeight.to_string(), "BBLSR");
    }
}
