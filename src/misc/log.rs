/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when a sentence is translated in some unexpected way.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [normalization](crate::procedures::normalize)
    pub const NORMALIZE: &str = "normalize";

    /// Logs related to [connective detection](crate::procedures::detect)
    pub const DETECTION: &str = "detection";

    /// Logs related to [segmentation](crate::procedures::segment)
    pub const SEGMENT: &str = "segment";

    /// Logs related to [symbol assignment](crate::procedures::assign)
    pub const ASSIGN: &str = "assign";

    /// Logs related to [building formulas](crate::procedures::build)
    pub const BUILD: &str = "build";

    /// Logs related to [parsing formulas](crate::procedures::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [rendering sentences](crate::procedures::render)
    pub const RENDER: &str = "render";

    /// Logs related to [request payloads](crate::io)
    pub const PAYLOAD: &str = "payload";
}
