/// An enum whose variants carry a stable wire `code` and a human readable
/// `description`.
///
/// Implementations are normally generated by [`define_code_enum!`], which
/// also wires up `Display`, `Serialize` and `Deserialize` so the enum travels
/// as its code.
///
/// # Example
/// ```
/// use loadup_common_lang::{CodeEnum, TerminalType};
///
/// assert_eq!(TerminalType::from_code("WAP"), Some(TerminalType::Wap));
/// assert_eq!(TerminalType::Wap.code(), "WAP");
/// assert_eq!(TerminalType::from_code("wap"), None);
/// ```
pub trait CodeEnum: Copy + Sized + 'static {
    /// The stable code this variant is persisted and transmitted as.
    fn code(&self) -> &'static str;

    /// A short description of the variant.
    fn description(&self) -> &'static str;

    /// Looks a variant up by its exact code.
    fn from_code(code: &str) -> Option<Self>;

    /// All variants in declaration order.
    fn values() -> &'static [Self];
}

/// Defines a fieldless enum implementing [`CodeEnum`].
///
/// Each variant maps to a `(code, description)` pair. Extra literals after
/// `|` are accepted by `from_code` as aliases but never emitted.
///
/// ```
/// use loadup_common_lang::{define_code_enum, CodeEnum};
///
/// define_code_enum!(
///     /// Payment channel.
///     Channel {
///         Card => ("CARD", "bank card"),
///         Wallet => ("WALLET", "e-wallet") | "EWALLET",
///     }
/// );
///
/// assert_eq!(Channel::from_code("EWALLET"), Some(Channel::Wallet));
/// assert_eq!(Channel::Wallet.to_string(), "WALLET");
/// ```
#[macro_export]
macro_rules! define_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => ($code:literal, $desc:literal) $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::CodeEnum for $name {
            fn code(&self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            fn description(&self) -> &'static str {
                match self {
                    $( Self::$variant => $desc, )+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code $(| $alias)* => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn values() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(<Self as $crate::CodeEnum>::code(self))
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(<Self as $crate::CodeEnum>::code(self))
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let code = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::CodeEnum>::from_code(&code).ok_or_else(|| {
                    <D::Error as $crate::__serde::de::Error>::custom(format_args!(
                        "unknown {} code `{}`",
                        stringify!($name),
                        code
                    ))
                })
            }
        }
    };
}

define_code_enum!(
    /// Gender of a natural person.
    Gender {
        /// Persisted as `MAIL` by existing data; `MALE` is accepted on input.
        Male => ("MAIL", "男") | "MALE",
        Female => ("FEMALE", "女"),
        Unknown => ("UNKNOWN", "未知"),
    }
);

define_code_enum!(
    /// The kind of terminal a request originated from.
    TerminalType {
        App => ("APP", "APP客户端"),
        Web => ("WEB", "PC浏览器终端"),
        Wap => ("WAP", "H5浏览器终端"),
        System => ("SYSTEM", "系统终端"),
        Pc => ("PC", "PC客户端"),
    }
);

define_code_enum!(
    /// Calendar and clock units used by scheduling configuration.
    TimeUnit {
        Second => ("S", "SECOND"),
        Minute => ("I", "MINUTE"),
        Hour => ("H", "HOUR"),
        Day => ("D", "DAY"),
        Month => ("M", "MONTH"),
        Year => ("Y", "YEAR"),
    }
);

define_code_enum!(
    /// Yes/no flag stored as a single character.
    BooleanFlag {
        True => ("Y", "是"),
        False => ("N", "否"),
    }
);

define_code_enum!(
    /// Log verbosity levels exposed in configuration.
    LoggerLevel {
        Debug => ("DEBUG", "debug级别的日志输出"),
        Info => ("INFO", "info级别的日志输出"),
        Warn => ("WARN", "warn级别的日志输出"),
        Error => ("ERROR", "error级别的日志输出"),
    }
);

define_code_enum!(
    /// Data URI prefixes for base64 encoded images.
    Base64Header {
        Png => ("data:image/png;base64,", "png image"),
        Gif => ("data:image/gif;base64,", "gif image"),
        Jpg => ("data:image/jpeg;base64,", "jpg/jpeg image"),
    }
);

impl From<bool> for BooleanFlag {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<BooleanFlag> for bool {
    fn from(value: BooleanFlag) -> Self {
        matches!(value, BooleanFlag::True)
    }
}

impl Base64Header {
    /// Splits a data URI into its recognised header and the base64 payload.
    ///
    /// Returns `None` when the input does not start with a known header.
    #[must_use]
    pub fn strip(data_uri: &str) -> Option<(Self, &str)> {
        Self::values().iter().find_map(|header| {
            data_uri
                .strip_prefix(header.code())
                .map(|payload| (*header, payload))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_round_trips_every_variant() {
        fn check<E: CodeEnum + PartialEq + core::fmt::Debug>() {
            for v in E::values() {
                assert_eq!(E::from_code(v.code()), Some(*v));
            }
        }
        check::<Gender>();
        check::<TerminalType>();
        check::<TimeUnit>();
        check::<BooleanFlag>();
        check::<LoggerLevel>();
        check::<Base64Header>();
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(TerminalType::from_code("TV"), None);
        assert_eq!(TimeUnit::from_code(""), None);
    }

    #[test]
    fn gender_accepts_alias_but_emits_legacy_code() {
        assert_eq!(Gender::from_code("MALE"), Some(Gender::Male));
        assert_eq!(Gender::Male.code(), "MAIL");
        assert_eq!(Gender::Female.description(), "女");
    }

    #[test]
    fn time_unit_month_and_day_are_distinct() {
        assert_eq!(TimeUnit::from_code("D"), Some(TimeUnit::Day));
        assert_eq!(TimeUnit::from_code("M"), Some(TimeUnit::Month));
    }

    #[test]
    fn boolean_flag_converts_to_and_from_bool() {
        assert_eq!(BooleanFlag::from(true), BooleanFlag::True);
        assert!(!bool::from(BooleanFlag::False));
    }

    #[test]
    fn base64_header_strip() {
        let (header, payload) = Base64Header::strip("data:image/png;base64,iVBORw0K").unwrap();
        assert_eq!(header, Base64Header::Png);
        assert_eq!(payload, "iVBORw0K");
        assert!(Base64Header::strip("data:text/plain;base64,AAAA").is_none());
    }

    #[test]
    fn serde_uses_code() {
        let json = serde_json::to_string(&TerminalType::System).unwrap();
        assert_eq!(json, "\"SYSTEM\"");
        let back: TerminalType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TerminalType::System);
        assert!(serde_json::from_str::<TerminalType>("\"TV\"").is_err());
    }
}
