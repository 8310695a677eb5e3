//! Declarative schema generation

/// Implement [`EnvRecord`](crate::EnvRecord) for a struct
///
/// Each entry names a field and the [`FieldDescriptor`](crate::FieldDescriptor)
/// it is bound with. Fields are bound in the order listed; fields not listed
/// keep their default value.
///
/// ```rust
/// use envbind::{env_record, field, EnvRecord, MapEnv};
/// use std::time::Duration;
///
/// #[derive(Debug, Default)]
/// struct Worker {
///     queues: Vec<String>,
///     poll: Duration,
///     cache_dir: String,
/// }
///
/// env_record!(Worker {
///     queues => field("QUEUES").delimiter(" ").default_value("high low"),
///     poll => field("POLL").min("100ms").max("1m").default_value("5s"),
///     cache_dir => field("-"),
/// });
///
/// let worker = Worker::from_source(&MapEnv::new().with("POLL", "250ms")).unwrap();
/// assert_eq!(worker.queues, vec!["high", "low"]);
/// assert_eq!(worker.poll, Duration::from_millis(250));
/// assert_eq!(worker.cache_dir, "");
/// ```
#[macro_export]
macro_rules! env_record {
    ($record:ty { $($field:ident => $descriptor:expr),* $(,)? }) => {
        impl $crate::EnvRecord for $record {
            fn schema() -> $crate::Schema<Self> {
                $crate::Schema::<Self>::new(stringify!($record))
                    $(
                        .field(stringify!($field), $descriptor, |record| {
                            $crate::IntoSlot::slot(&mut record.$field)
                        })
                    )*
            }
        }
    };
}
