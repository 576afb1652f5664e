use cpc_translate::{context::Context, io::Endpoint};

use serde_json::{json, Value};

fn reply(endpoint: Endpoint, body: &str) -> (u16, Value) {
    let the_context = Context::default();
    let reply = the_context.handle(endpoint, body);
    (reply.status, serde_json::from_str(&reply.body).unwrap())
}

mod sentence_to_formula {
    use super::*;

    #[test]
    fn success() {
        let (status, body) = reply(
            Endpoint::SentenceToFormula,
            r#"{"frase": "  Se chover, então a grama ficará molhada. "}"#,
        );
        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "frase_original": "Se chover, então a grama ficará molhada.",
                "frase_normalizada": "se chover , então a grama ficará molhada .",
                "formula_cpc": "(P → Q)",
                "mapeamento": { "P": "chover", "Q": "a grama ficará molhada" }
            })
        );
    }

    #[test]
    fn missing_sentence() {
        let (status, body) = reply(Endpoint::SentenceToFormula, "{}");
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "ok": false, "erro": "empty input" }));
    }

    #[test]
    fn not_json() {
        let (status, body) = reply(Endpoint::SentenceToFormula, "frase=chove");
        assert_eq!(status, 400);
        assert_eq!(body["ok"], json!(false));
        assert!(body["erro"].as_str().unwrap().starts_with("invalid request"));
    }

    #[test]
    fn translation_failure() {
        let (status, body) = reply(
            Endpoint::SentenceToFormula,
            r#"{"frase": "chove e se venta então faz frio"}"#,
        );
        assert_eq!(status, 500);
        assert_eq!(
            body,
            json!({ "ok": false, "erro": "unmapped atomic clause: venta" })
        );
    }
}

mod formula_to_sentence {
    use super::*;

    #[test]
    fn success() {
        let (status, body) = reply(
            Endpoint::FormulaToSentence,
            r#"{"formula": "p^¬q", "mapeamento": {"p": "Gatos comem de tudo", "q": "Kiki é uma gata"}}"#,
        );
        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "ok": true,
                "formula_original": "p^¬q",
                "mapeamento": { "P": "Gatos comem de tudo", "Q": "Kiki é uma gata" },
                "frase_nl": "Gatos comem de tudo e não Kiki é uma gata"
            })
        );
    }

    #[test]
    fn missing_fields() {
        let (status, body) = reply(Endpoint::FormulaToSentence, r#"{"mapeamento": {"p": "chove"}}"#);
        assert_eq!(status, 400);
        assert_eq!(body["erro"], json!("empty formula"));

        let (status, body) = reply(Endpoint::FormulaToSentence, r#"{"formula": "p"}"#);
        assert_eq!(status, 400);
        assert_eq!(body["erro"], json!("empty or missing mapping"));

        let (status, body) = reply(
            Endpoint::FormulaToSentence,
            r#"{"formula": "p", "mapeamento": {"pq": "chove"}}"#,
        );
        assert_eq!(status, 400);
        assert_eq!(body["erro"], json!("empty or missing mapping"));
    }

    #[test]
    fn malformed_formula() {
        let (status, body) = reply(
            Endpoint::FormulaToSentence,
            r#"{"formula": "p ^^ q", "mapeamento": {"p": "chove"}}"#,
        );
        assert_eq!(status, 500);
        assert_eq!(
            body["erro"],
            json!("malformed formula: unexpected token '∧' at position 2")
        );
    }

    #[test]
    fn mapping_of_wrong_type() {
        let (status, _) = reply(
            Endpoint::FormulaToSentence,
            r#"{"formula": "p", "mapeamento": ["p"]}"#,
        );
        assert_eq!(status, 400);
    }
}
