/*!
Request and response payloads of the two translation endpoints.

The payloads are JSON objects, with the (Portuguese) field names of the web service the library was written for:

| Endpoint | Request | Response |
|----------|---------|----------|
| `/api/nl-to-cpc` | `{"frase": …}` | `{"ok": true, "frase_original": …, "frase_normalizada": …, "formula_cpc": …, "mapeamento": {…}}` |
| `/api/cpc-to-nl` | `{"formula": …, "mapeamento": {…}}` | `{"ok": true, "formula_original": …, "mapeamento": {…}, "frase_nl": …}` |

Any error is returned as `{"ok": false, "erro": …}`.

No transport is provided.
Instead, [handle](Context::handle) takes the body of a request and returns a [Reply] with a body and a status, and it is left to some binding to carry these over HTTP (or, as in the cli, over lines of text).

- An error with the input, including a body which is not JSON and a missing field, has status 400.
- Any other error has status 500.

```rust
# use cpc_translate::context::Context;
# use cpc_translate::io::Endpoint;
let the_context = Context::default();

let reply = the_context.handle(Endpoint::SentenceToFormula, r#"{"frase": "chove e venta"}"#);
assert_eq!(reply.status, 200);
assert!(reply.body.contains(r#""formula_cpc":"(P ∧ Q)""#));

let reply = the_context.handle(Endpoint::FormulaToSentence, r#"{"formula": "p v q"}"#);
assert_eq!(reply.status, 400);
assert_eq!(reply.body, r#"{"ok":false,"erro":"empty or missing mapping"}"#);
```
*/

use serde::{Deserialize, Serialize};

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::mapping::SymbolMapping,
    types::err::{self},
};

/// The endpoints of a translation service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// `/api/nl-to-cpc`
    SentenceToFormula,

    /// `/api/cpc-to-nl`
    FormulaToSentence,
}

impl Endpoint {
    /// The path of the endpoint.
    pub fn path(&self) -> &'static str {
        match self {
            Self::SentenceToFormula => "/api/nl-to-cpc",
            Self::FormulaToSentence => "/api/cpc-to-nl",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl std::str::FromStr for Endpoint {
    type Err = String;

    /// An endpoint from its path, with or without the leading `/api/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches("/api/") {
            "nl-to-cpc" => Ok(Self::SentenceToFormula),
            "cpc-to-nl" => Ok(Self::FormulaToSentence),
            _ => Err(format!("unknown endpoint: {s}")),
        }
    }
}

/// The request body of [SentenceToFormula](Endpoint::SentenceToFormula).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SentenceRequest {
    #[serde(default, rename = "frase")]
    pub sentence: String,
}

/// The request body of [FormulaToSentence](Endpoint::FormulaToSentence).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FormulaRequest {
    #[serde(default)]
    pub formula: String,

    #[serde(default, rename = "mapeamento")]
    pub mapping: SymbolMapping,
}

/// The response body of a successful [SentenceToFormula](Endpoint::SentenceToFormula).
#[derive(Clone, Debug, Serialize)]
pub struct SentenceResponse {
    pub ok: bool,

    #[serde(rename = "frase_original")]
    pub original: String,

    #[serde(rename = "frase_normalizada")]
    pub normalized: String,

    #[serde(rename = "formula_cpc")]
    pub formula: String,

    #[serde(rename = "mapeamento")]
    pub mapping: SymbolMapping,
}

/// The response body of a successful [FormulaToSentence](Endpoint::FormulaToSentence).
#[derive(Clone, Debug, Serialize)]
pub struct FormulaResponse {
    pub ok: bool,

    #[serde(rename = "formula_original")]
    pub formula: String,

    #[serde(rename = "mapeamento")]
    pub mapping: SymbolMapping,

    #[serde(rename = "frase_nl")]
    pub sentence: String,
}

/// The response body of any failed request.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,

    #[serde(rename = "erro")]
    pub error: String,
}

impl From<&err::ErrorKind> for ErrorResponse {
    fn from(e: &err::ErrorKind) -> Self {
        ErrorResponse {
            ok: false,
            error: e.to_string(),
        }
    }
}

/// The status of a reply to an error.
pub fn status_of(e: &err::ErrorKind) -> u16 {
    match e.is_input_error() {
        true => 400,
        false => 500,
    }
}

/// A reply to a request, as a (JSON) body and an HTTP status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn success(body: &impl Serialize) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Reply { status: 200, body },
            Err(e) => {
                log::error!(target: targets::PAYLOAD, "Failed to write a response: {e}");
                let body = serde_json::json!({ "ok": false, "erro": e.to_string() }).to_string();
                Reply { status: 500, body }
            }
        }
    }

    fn failure(e: &err::ErrorKind) -> Self {
        let status = status_of(e);
        let body = match serde_json::to_string(&ErrorResponse::from(e)) {
            Ok(body) => body,
            Err(_) => serde_json::json!({ "ok": false, "erro": e.to_string() }).to_string(),
        };
        Reply { status, body }
    }
}

fn read_request<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, err::ErrorKind> {
    serde_json::from_str(body).map_err(|e| {
        log::info!(target: targets::PAYLOAD, "Unreadable request: {e}");
        err::InputError::Json(e.to_string()).into()
    })
}

impl Context {
    /// Translates a request `body` sent to `endpoint`, and returns the reply.
    pub fn handle(&self, endpoint: Endpoint, body: &str) -> Reply {
        log::trace!(target: targets::PAYLOAD, "{endpoint} {body}");

        let reply = match endpoint {
            Endpoint::SentenceToFormula => self
                .handle_sentence(body)
                .map(|response| Reply::success(&response)),

            Endpoint::FormulaToSentence => self
                .handle_formula(body)
                .map(|response| Reply::success(&response)),
        };

        reply.unwrap_or_else(|e| {
            log::info!(target: targets::PAYLOAD, "{endpoint} failed: {e}");
            Reply::failure(&e)
        })
    }

    fn handle_sentence(&self, body: &str) -> Result<SentenceResponse, err::ErrorKind> {
        let request: SentenceRequest = read_request(body)?;
        let report = self.sentence_to_formula(request.sentence.trim())?;

        Ok(SentenceResponse {
            ok: true,
            original: report.original,
            normalized: report.normalized,
            formula: report.formula,
            mapping: report.mapping,
        })
    }

    fn handle_formula(&self, body: &str) -> Result<FormulaResponse, err::ErrorKind> {
        let request: FormulaRequest = read_request(body)?;
        let report = self.formula_to_sentence(request.formula.trim(), &request.mapping)?;

        Ok(FormulaResponse {
            ok: true,
            formula: report.formula,
            mapping: report.mapping,
            sentence: report.sentence,
        })
    }
}
