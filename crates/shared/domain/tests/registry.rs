use enumkit_domain::config::RegistryConfig;
use enumkit_domain::{Declaration, EnumDomain, Enumeration, Registry};
use serial_test::serial;

#[derive(Debug)]
struct Color;

impl Enumeration for Color {
    const TYPE_NAME: &'static str = "Color";
    const DECLARATIONS: &'static [Declaration<Self>] = &[
        Declaration::new("RED", || Color),
        Declaration::new("GREEN", || Color),
        Declaration::new("BLUE", || Color),
    ];
}

/// Claims the same type name as [`Color`].
#[derive(Debug)]
struct Impostor;

impl Enumeration for Impostor {
    const TYPE_NAME: &'static str = "Color";
    const DECLARATIONS: &'static [Declaration<Self>] = &[Declaration::new("RED", || Impostor)];
}

#[derive(Debug)]
struct Twice;

impl Enumeration for Twice {
    const TYPE_NAME: &'static str = "Twice";
    const DECLARATIONS: &'static [Declaration<Self>] =
        &[Declaration::new("ONE", || Twice), Declaration::new("ONE", || Twice)];
}

#[derive(Debug)]
struct Weekday;

impl Enumeration for Weekday {
    const TYPE_NAME: &'static str = "Weekday";
    const DECLARATIONS: &'static [Declaration<Self>] = &[
        Declaration::new("MONDAY", || Weekday),
        Declaration::new("TUESDAY", || Weekday),
    ];
}

#[test]
#[serial]
fn register_is_idempotent_and_resolvable() {
    let info = Registry::register::<Color>().unwrap();
    assert_eq!(info.type_name(), "Color");
    assert_eq!(info.constants(), &["RED", "GREEN", "BLUE"]);
    assert_eq!(info.name_of(2), Some("BLUE"));
    assert_eq!(info.ordinal_of("GREEN"), Some(1));
    assert!(info.is::<Color>());

    let again = Registry::register::<Color>().unwrap();
    assert_eq!(again.type_id(), info.type_id());

    let resolved = Registry::resolve("Color").unwrap();
    assert!(resolved.is::<Color>());
    assert!(Registry::is_registered::<Color>());
}

#[test]
#[serial]
fn conflicting_type_names_are_rejected() {
    Registry::register::<Color>().unwrap();

    let err = Registry::register::<Impostor>().unwrap_err();
    assert_eq!(err.kind(), "IllegalArgument");
    assert!(!Registry::is_registered::<Impostor>());
}

#[test]
#[serial]
fn duplicate_constants_are_rejected() {
    let err = Registry::register::<Twice>().unwrap_err();
    assert_eq!(err.kind(), "IllegalArgument");
    assert!(err.to_string().contains("Duplicate enum constant Twice::ONE"));
    assert!(!Registry::contains("Twice"));
}

#[test]
#[serial]
fn unknown_type_name_is_not_found() {
    let err = Registry::resolve("Nope").unwrap_err();
    assert_eq!(err.kind(), "NotFound");
}

#[test]
#[serial]
fn builder_registers_in_order_and_can_load_eagerly() {
    let registered = Registry::builder()
        .register::<Color>()
        .register::<Weekday>()
        .config(&RegistryConfig { eager: true })
        .build()
        .unwrap();

    let names: Vec<_> = registered.iter().map(|info| info.type_name()).collect();
    assert_eq!(names, vec!["Color", "Weekday"]);
    assert!(Weekday::is_loaded());

    let listed: Vec<_> = Registry::domains().into_iter().map(|info| info.type_name()).collect();
    assert!(listed.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(listed.contains(&"Weekday"));
}

#[test]
#[serial]
fn builder_stops_at_first_error() {
    let err = Registry::builder().register::<Twice>().register::<Color>().build().unwrap_err();
    assert_eq!(err.kind(), "IllegalArgument");
}
