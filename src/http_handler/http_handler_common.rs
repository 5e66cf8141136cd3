use std::fmt;
use strum_macros::IntoStaticStr;

/// Declares an integer-coded vendor enum that keeps unknown codes in
/// `Other` instead of failing to decode.
macro_rules! coded_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, serde::Deserialize, serde::Serialize)]
        #[serde(from = "i64", into = "i64")]
        pub enum $name {
            $($variant,)+
            Other(i64),
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                match value {
                    $($code => $name::$variant,)+
                    other => $name::Other(other),
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $code,)+
                    $name::Other(other) => other,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self { $name::from(0) }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let name: &'static str = self.into();
                write!(f, "{name}({})", i64::from(*self))
            }
        }
    };
}

coded_enum! {
    /// State of an auto-download task.
    TaskStatus {
        Paused = -6,
        ConnectionLimit = -5,
        Analyzing = -4,
        NotFinished = -3,
        InsufficientDisk = -2,
        Waiting = -1,
        Analyzed = 0,
        Downloading = 1,
        NoFiles = 2,
        Finished = 3,
        // Possibly a generic failure, with 6 being the download-specific one.
        DownloadFailed = 4,
        Delete = 5,
        DownloadFailed2 = 6,
        Timeout = 8,
    }
}

coded_enum! {
    /// How often an auto-download task repeats.
    TaskPeriod {
        Manual = -1,
        Once = 0,
        EveryDay = 1,
        EveryWeek = 2,
        EveryMonth = 3,
    }
}

coded_enum! {
    /// What an auto-download task fetches from the device.
    TaskType {
        BlackBox = 0,
        Video = 1,
        BlackBoxVideo = 2,
    }
}
