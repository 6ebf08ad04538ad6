//! The fixed table of recognized directives.
//!
//! Each entry couples a key with a function that validates the raw value
//! and, only once it is valid, writes it into the [`Configuration`].

use tracing::{debug, warn};

use super::{
    directive::Directive,
    error::RejectionReason,
    structure::{Configuration, DaemonMode},
};


pub const ENABLED_TOKEN: &str = "yes";
pub const DISABLED_TOKEN: &str = "no";

/// Bounds shared by both task queue thread counts.
pub const TASKQ_THREAD_RANGE: (u8, u8) = (1, u8::MAX);

/// Bounds shared by every other integer directive.
pub const POSITIVE_RANGE: (u32, u32) = (1, u32::MAX);


/// How applying a single directive can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rejection {
    Invalid(RejectionReason),
    AllocationFailure,
}

impl From<RejectionReason> for Rejection {
    fn from(reason: RejectionReason) -> Self {
        Rejection::Invalid(reason)
    }
}


type ApplyFn = fn(&mut Configuration, &str) -> Result<(), Rejection>;

struct DirectiveHandler {
    key: &'static str,
    apply: ApplyFn,
}

const DIRECTIVES: &[DirectiveHandler] = &[
    DirectiveHandler {
        key: "url",
        apply: apply_url,
    },
    DirectiveHandler {
        key: "daemon",
        apply: apply_daemon,
    },
    DirectiveHandler {
        key: "num_taskq_thread",
        apply: |configuration, value| {
            configuration.num_taskq_thread = parse_bounded(value, TASKQ_THREAD_RANGE)?;
            Ok(())
        },
    },
    DirectiveHandler {
        key: "max_taskq_thread",
        apply: |configuration, value| {
            configuration.max_taskq_thread = parse_bounded(value, TASKQ_THREAD_RANGE)?;
            Ok(())
        },
    },
    DirectiveHandler {
        key: "parallel",
        apply: |configuration, value| {
            configuration.parallel = parse_bounded(value, POSITIVE_RANGE)?;
            Ok(())
        },
    },
    DirectiveHandler {
        key: "property_size",
        apply: |configuration, value| {
            configuration.property_size = parse_bounded(value, POSITIVE_RANGE)?;
            Ok(())
        },
    },
    DirectiveHandler {
        key: "msq_len",
        apply: |configuration, value| {
            configuration.msq_len = parse_bounded(value, POSITIVE_RANGE)?;
            Ok(())
        },
    },
    DirectiveHandler {
        key: "qos_timer",
        apply: |configuration, value| {
            configuration.qos_timer = parse_bounded(value, POSITIVE_RANGE)?;
            Ok(())
        },
    },
];


/// Names of all recognized directives, in table order.
pub fn recognized_keys() -> impl Iterator<Item = &'static str> {
    DIRECTIVES.iter().map(|handler| handler.key)
}

/// Look the directive's key up in the table and apply its value.
///
/// The record is only written when the value is valid.
pub(crate) fn apply_directive(
    configuration: &mut Configuration,
    directive: &Directive<'_>,
) -> Result<(), Rejection> {
    let handler = DIRECTIVES
        .iter()
        .find(|handler| handler.key == directive.key)
        .ok_or(Rejection::Invalid(RejectionReason::UnknownKey))?;

    (handler.apply)(configuration, directive.value)?;

    debug!(
        key = %directive.key,
        value = %directive.value,
        "Read configuration directive."
    );

    Ok(())
}


fn apply_url(configuration: &mut Configuration, value: &str) -> Result<(), Rejection> {
    let mut url = String::new();
    url.try_reserve_exact(value.len())
        .map_err(|_| Rejection::AllocationFailure)?;
    url.push_str(value);

    configuration.url = Some(url);
    Ok(())
}

fn apply_daemon(configuration: &mut Configuration, value: &str) -> Result<(), Rejection> {
    let mode = if value.starts_with(ENABLED_TOKEN) {
        DaemonMode::Enabled
    } else if value.starts_with(DISABLED_TOKEN) {
        DaemonMode::Disabled
    } else {
        return Err(Rejection::Invalid(RejectionReason::UnknownToken {
            value: value.to_string(),
            accepted: &[ENABLED_TOKEN, DISABLED_TOKEN],
        }));
    };

    configuration.daemon = mode;
    Ok(())
}

/// Parse the run of leading decimal digits in `value` and check it against
/// the inclusive `(min, max)` range.
///
/// Anything after the digits is ignored, so `"12abc"` reads as `12`.
fn parse_bounded<T>(value: &str, (min, max): (T, T)) -> Result<T, RejectionReason>
where
    T: Copy + Into<u64> + TryFrom<u64>,
{
    let digits_end = value
        .find(|character: char| !character.is_ascii_digit())
        .unwrap_or(value.len());

    if digits_end == 0 {
        return Err(RejectionReason::NotAnInteger {
            value: value.to_string(),
        });
    }

    let (min, max) = (min.into(), max.into());
    let out_of_range = || RejectionReason::OutOfRange {
        value: value.to_string(),
        min,
        max,
    };

    // Too many digits for a u64 is out of range for every field.
    let number = value[..digits_end]
        .parse::<u64>()
        .map_err(|_| out_of_range())?;

    if number < min || number > max {
        return Err(out_of_range());
    }

    let trailing = &value[digits_end..];
    if !trailing.is_empty() {
        warn!(value, trailing, "Ignoring characters after the integer value.");
    }

    T::try_from(number).map_err(|_| out_of_range())
}
