//! Integration tests binding whole records

use envbind::{env_record, field, BindError, Binder, EnvRecord, Error, FieldDescriptor, MapEnv};
use std::collections::HashMap;
use url::Url;

#[derive(Debug, Default)]
struct SampleConfig {
    my_bool: bool,
    my_string: String,

    my_int: isize,
    my_int8: i8,
    my_int16: i16,
    my_int32: i32,
    my_int64: i64,
    my_duration: chrono::Duration,

    my_uint: usize,
    my_uint8: u8,
    my_uint16: u16,
    my_uint32: u32,
    my_uint64: u64,

    my_float32: f32,
    my_float64: f64,

    my_url: Option<Url>,

    my_bool_arr: Vec<bool>,
    my_str_arr: Vec<String>,
    my_int_arr: Vec<isize>,
    my_int32_arr: Vec<i32>,
    my_duration_arr: Vec<chrono::Duration>,
    my_uint8_arr: Vec<u8>,
    my_float32_arr: Vec<f32>,
    my_url_arr: Vec<Url>,

    my_skipped_str: String,
    my_other_skipped_str: String,
}

env_record!(SampleConfig {
    my_bool => field("mybool"),
    my_string => field("mystring"),
    my_int => field("myint").range("0", "128"),
    my_int8 => field("myint8"),
    my_int16 => field("myint16"),
    my_int32 => field("myint32"),
    my_int64 => field("myint64"),
    my_duration => field("myduration").range("1m", "1h").default_value("1h"),
    my_uint => field("myuint").range("128", "256"),
    my_uint8 => field("myuint8"),
    my_uint16 => field("myuint16"),
    my_uint32 => field("myuint32"),
    my_uint64 => field("myuint64"),
    my_float32 => field("myfloat32").range("5.01", "6.0"),
    my_float64 => field("myfloat64"),
    my_url => field("myurl"),
    my_bool_arr => field("myboolarr"),
    my_str_arr => field("mystrarr"),
    my_int_arr => field("myintarr").range("5", "10"),
    my_int32_arr => field("myint32arr").delimiter(" ").default_value("1 2 3 4 5"),
    my_duration_arr => field("mydurationarr").default_value("5m, 1h5m"),
    my_uint8_arr => field("myuint8arr"),
    my_float32_arr => field("myfloat32arr").range("5", "10"),
    my_url_arr => field("myurlarr")
        .delimiter(" ")
        .default_value("http://www.google.com http://www.reddit.com"),
    my_skipped_str => field(""),
    my_other_skipped_str => field("-"),
});

#[test]
fn test_defaults_only() {
    let config = SampleConfig::from_source(&MapEnv::new()).unwrap();

    assert_eq!(config.my_duration, chrono::Duration::hours(1));
    assert_eq!(config.my_int32_arr, vec![1, 2, 3, 4, 5]);
    assert_eq!(
        config.my_duration_arr,
        vec![chrono::Duration::minutes(5), chrono::Duration::minutes(65)]
    );
    assert_eq!(
        config
            .my_url_arr
            .iter()
            .map(|url| url.host_str().unwrap_or_default())
            .collect::<Vec<_>>(),
        vec!["www.google.com", "www.reddit.com"]
    );

    // empty optional values leave zero values in place
    assert_eq!(config.my_uint, 0);
    assert_eq!(config.my_float32, 0.0);
    assert!(config.my_url.is_none());
    assert!(config.my_bool_arr.is_empty());
    assert_eq!(config.my_string, "");
}

#[test]
fn test_values_from_environment() {
    let env = MapEnv::new()
        .with("mybool", "true")
        .with("mystring", "  hello world  ")
        .with("myint", "128")
        .with("myint8", "-128")
        .with("myint16", "32767")
        .with("myint32", "-2147483648")
        .with("myint64", "9223372036854775807")
        .with("myduration", "1m")
        .with("myuint", "200")
        .with("myuint8", "255")
        .with("myuint16", "65535")
        .with("myuint32", "4294967295")
        .with("myuint64", "18446744073709551615")
        .with("myfloat32", "5.5")
        .with("myfloat64", "-1.25e10")
        .with("myurl", "https://user@example.com:8443/path?x=1")
        .with("myboolarr", "1, f, T")
        .with("mystrarr", "a, b , c")
        .with("myintarr", "5,7,10")
        .with("myint32arr", "10 20")
        .with("mydurationarr", "1s,1.5h")
        .with("myuint8arr", "0,255")
        .with("myfloat32arr", "5, 9.75")
        .with("myurlarr", "http://a.example")
        .with("-", "never read");

    let config = SampleConfig::from_source(&env).unwrap();

    assert!(config.my_bool);
    assert_eq!(config.my_string, "hello world");
    assert_eq!(config.my_int, 128);
    assert_eq!(config.my_int8, i8::MIN);
    assert_eq!(config.my_int16, i16::MAX);
    assert_eq!(config.my_int32, i32::MIN);
    assert_eq!(config.my_int64, i64::MAX);
    assert_eq!(config.my_duration, chrono::Duration::minutes(1));
    assert_eq!(config.my_uint, 200);
    assert_eq!(config.my_uint8, u8::MAX);
    assert_eq!(config.my_uint16, u16::MAX);
    assert_eq!(config.my_uint32, u32::MAX);
    assert_eq!(config.my_uint64, u64::MAX);
    assert_eq!(config.my_float32, 5.5);
    assert_eq!(config.my_float64, -1.25e10);

    let url = config.my_url.unwrap();
    assert_eq!(url.username(), "user");
    assert_eq!(url.port(), Some(8443));

    assert_eq!(config.my_bool_arr, vec![true, false, true]);
    assert_eq!(config.my_str_arr, vec!["a", "b", "c"]);
    assert_eq!(config.my_int_arr, vec![5, 7, 10]);
    assert_eq!(config.my_int32_arr, vec![10, 20]);
    assert_eq!(
        config.my_duration_arr,
        vec![chrono::Duration::seconds(1), chrono::Duration::minutes(90)]
    );
    assert_eq!(config.my_uint8_arr, vec![0, 255]);
    assert_eq!(config.my_float32_arr, vec![5.0, 9.75]);
    assert_eq!(config.my_url_arr.len(), 1);
    assert_eq!(config.my_skipped_str, "");
    assert_eq!(config.my_other_skipped_str, "");
}

#[test]
fn test_every_failure_reported_in_order() {
    let env = MapEnv::new()
        .with("mybool", "yes")
        .with("myint", "129")
        .with("myuint", "127")
        .with("myfloat32", "5.0")
        .with("myintarr", "4,5,11")
        .with("myint8", "7");

    let mut config = SampleConfig::default();
    let error = config.bind_from(&env).unwrap_err();
    let diagnostics = error.diagnostics().unwrap();

    assert_eq!(
        diagnostics.fields(),
        vec!["my_bool", "my_int", "my_uint", "my_float32", "my_int_arr"]
    );
    assert_eq!(
        diagnostics.get("my_int").unwrap().error.to_string(),
        "my_int must be no more than 128"
    );
    assert_eq!(
        diagnostics.get("my_uint").unwrap().error.to_string(),
        "my_uint must be at least 128"
    );
    assert_eq!(
        diagnostics.get("my_float32").unwrap().error.to_string(),
        "my_float32 must be at least 5.01"
    );
    assert!(matches!(
        diagnostics.get("my_int_arr").unwrap().error,
        BindError::Tokens(ref errors) if errors.len() == 2
    ));

    // fields around the failures are still bound
    assert_eq!(config.my_int8, 7);
    assert_eq!(config.my_duration, chrono::Duration::hours(1));

    let message = error.to_string();
    assert!(message.starts_with("my_bool: invalid value \"yes\""), "{}", message);
    assert!(
        message.ends_with(
            ", my_int_arr: my_int_arr must be at least 5, my_int_arr must be no more than 10"
        ),
        "{}",
        message
    );
}

#[derive(Debug, Default)]
struct Timeout {
    my_dur: chrono::Duration,
}

env_record!(Timeout {
    my_dur => field("mydur").min("1m").max("1h"),
});

#[test]
fn test_duration_within_bounds() {
    let timeout = Timeout::from_source(&MapEnv::new().with("mydur", "1h")).unwrap();
    assert_eq!(timeout.my_dur.num_nanoseconds(), Some(3_600_000_000_000));
}

#[test]
fn test_duration_above_maximum() {
    let error = Timeout::from_source(&MapEnv::new().with("mydur", "90m")).unwrap_err();
    let failure = error.diagnostics().unwrap().get("my_dur").unwrap();

    assert_eq!(
        failure.error,
        BindError::AboveMaximum {
            field: "my_dur".into(),
            max: "1h0m0s".into()
        }
    );
}

#[derive(Debug, Default)]
struct Credentials {
    user: String,
    token: String,
}

env_record!(Credentials {
    user => field("reqField").required(true),
    token => field("TOKEN").required(true).default_value("anonymous"),
});

#[test]
fn test_required_fields() {
    let error = Credentials::from_source(&MapEnv::new()).unwrap_err();
    let diagnostics = error.diagnostics().unwrap();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.get("user").unwrap().error,
        BindError::MissingRequiredVariable {
            key: "reqField".into()
        }
    );
    assert!(error.to_string().contains("missing required variable"));

    let creds = Credentials::from_source(&MapEnv::new().with("reqField", "admin")).unwrap();
    assert_eq!(creds.user, "admin");
    assert_eq!(creds.token, "anonymous");
}

#[derive(Debug, Default)]
struct BadRequired {
    bad_required_field: String,
}

env_record!(BadRequired {
    bad_required_field => field("badfield").required_literal("asdf"),
});

#[test]
fn test_bad_required_literal() {
    let env = MapEnv::new().with("badfield", "value");
    let error = BadRequired::from_source(&env).unwrap_err();
    assert!(error.to_string().contains("either true or false"));
}

#[derive(Debug, Default)]
struct Mixed {
    labels: HashMap<String, String>,
    name: String,
}

env_record!(Mixed {
    labels => field("LABELS"),
    name => field("NAME"),
});

#[test]
fn test_unsupported_field_next_to_valid_field() {
    let env = MapEnv::new().with("LABELS", "a=1").with("NAME", "svc");
    let mut mixed = Mixed::default();
    let error = mixed.bind_from(&env).unwrap_err();
    let diagnostics = error.diagnostics().unwrap();

    assert_eq!(diagnostics.fields(), vec!["labels"]);
    assert!(error.to_string().contains("unsupported type"));
    assert_eq!(mixed.name, "svc");
}

#[derive(Debug, Default)]
struct Unsupported {
    pointer: Option<String>,
    nested: Vec<Vec<u8>>,
}

env_record!(Unsupported {
    pointer => field("unsupportedptr"),
    nested => field("unsupportedslice"),
});

#[test]
fn test_unsupported_shapes() {
    let error = Unsupported::from_source(&MapEnv::new()).unwrap_err();
    let message = error.to_string();

    assert!(message.contains("unsupported pointer type string"), "{}", message);
    assert!(message.contains("unsupported slice type"), "{}", message);
}

#[test]
fn test_skipped_unsupported_field_is_ignored() {
    #[derive(Debug, Default)]
    struct Skipped {
        labels: HashMap<String, String>,
    }

    env_record!(Skipped {
        labels => FieldDescriptor::skip(),
    });

    assert!(Skipped::from_source(&MapEnv::new()).is_ok());
}

#[test]
fn test_bind_any_requires_registered_record() {
    let binder = Binder::new(MapEnv::new().with("mydur", "2m")).register::<Timeout>();

    let mut text = String::from("unchanged");
    assert_eq!(binder.bind_any(&mut text), Err(Error::NotARecordReference));
    assert_eq!(text, "unchanged");

    let mut creds = Credentials::default();
    assert_eq!(binder.bind_any(&mut creds), Err(Error::NotARecordReference));

    let mut timeout = Timeout::default();
    binder.bind_any(&mut timeout).unwrap();
    assert_eq!(timeout.my_dur, chrono::Duration::minutes(2));
}

#[test]
fn test_diagnostics_summary_json() {
    let error = Timeout::from_source(&MapEnv::new().with("mydur", "30s")).unwrap_err();
    let json = error.diagnostics().unwrap().to_json().unwrap();

    assert!(json.contains("\"field\": \"my_dur\""), "{}", json);
    assert!(json.contains("\"env\": \"mydur\""), "{}", json);
    assert!(json.contains("\"code\": \"below_minimum\""), "{}", json);
    assert!(json.contains("must be at least 1m0s"), "{}", json);
}

#[test]
fn test_from_process_env() {
    #[derive(Debug, Default)]
    struct FromProcess {
        level: u8,
    }

    env_record!(FromProcess {
        level => field("ENVBIND_TEST_PROCESS_LEVEL"),
    });

    std::env::set_var("ENVBIND_TEST_PROCESS_LEVEL", "3");
    let loaded = FromProcess::from_env().unwrap();
    std::env::remove_var("ENVBIND_TEST_PROCESS_LEVEL");

    assert_eq!(loaded.level, 3);
}

#[test]
fn test_oversized_duration_is_rejected() {
    let env = MapEnv::new().with("mydur", "94522879700260684295381835.9999999999999999999h");
    let mut timeout = Timeout::default();
    let error = timeout.bind_from(&env).unwrap_err();

    assert_eq!(
        error.diagnostics().unwrap().get("my_dur").unwrap().error.code(),
        "malformed_value"
    );
    assert_eq!(timeout.my_dur, chrono::Duration::zero());
}

#[derive(Debug, Default)]
struct Ratio {
    ratio: f32,
    capped: f32,
}

env_record!(Ratio {
    ratio => field("RATIO"),
    capped => field("CAPPED").max("1e39"),
});

#[test]
fn test_float_beyond_width() {
    let env = MapEnv::new().with("RATIO", "1e39").with("CAPPED", "1");
    let error = Ratio::from_source(&env).unwrap_err();
    let diagnostics = error.diagnostics().unwrap();

    assert_eq!(diagnostics.fields(), vec!["ratio", "capped"]);
    assert_eq!(diagnostics.get("ratio").unwrap().error.code(), "malformed_value");
    assert_eq!(diagnostics.get("capped").unwrap().error.code(), "invalid_bound_tag");
}
