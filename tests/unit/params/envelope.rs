use super::*;

#[test]
fn from_name_resolves_every_supported_kind() {
    for name in Envelope::NAMES {
        let env = Envelope::from_name(name, 20.0).unwrap();
        assert_eq!(env.name(), name);
        assert_eq!(env.to_string(), name);
    }
    assert_eq!(
        Envelope::from_name("gaussian", 7.5).unwrap(),
        Envelope::Gaussian { std: 7.5 }
    );
}

#[test]
fn std_is_ignored_for_non_gaussian_kinds() {
    assert_eq!(
        Envelope::from_name("sine", f64::NAN).unwrap(),
        Envelope::Sine
    );
}

#[test]
fn unknown_names_are_invalid_envelope_errors() {
    for name in ["invalid_name", "rectangular", "circular", "Gaussian", ""] {
        let err = Envelope::from_name(name, 20.0).unwrap_err();
        assert!(matches!(err, GaborError::InvalidEnvelope(ref n) if n == name));
        assert!(err.is_config());
    }
}

#[test]
fn gaussian_std_must_be_non_negative_and_finite() {
    assert!(Envelope::gaussian(0.0).is_ok());
    assert!(Envelope::gaussian(-1.0).is_err());
    assert!(Envelope::gaussian(f64::INFINITY).is_err());
    assert!(Envelope::gaussian(f64::NAN).is_err());
}
