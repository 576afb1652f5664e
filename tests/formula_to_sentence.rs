use cpc_translate::{
    context::Context,
    structures::{expression::Expression, mapping::SymbolMapping},
    types::err::{self, ParseError},
};

fn weather() -> SymbolMapping {
    SymbolMapping::from_pairs([("P", "chove"), ("Q", "venta"), ("R", "faz frio")])
}

mod scenarios {
    use super::*;

    #[test]
    fn conjunction_with_negation() {
        let the_context = Context::default();
        let mapping = SymbolMapping::from_pairs([
            ("P", "gatos comem de tudo"),
            ("Q", "kiki é uma gata"),
        ]);

        let report = the_context.formula_to_sentence("p^¬q", &mapping).unwrap();
        assert_eq!(report.sentence, "gatos comem de tudo e não kiki é uma gata");
        assert_eq!(report.formula, "p^¬q");
        assert_eq!(report.to_string(), "s gatos comem de tudo e não kiki é uma gata\n");
    }

    #[test]
    fn biconditional() {
        let the_context = Context::default();
        let report = the_context.formula_to_sentence("p<->q", &weather()).unwrap();

        assert_eq!(
            report.expression,
            Expression::equivalent(Expression::Symbol('P'), Expression::Symbol('Q'))
        );
        assert_eq!(report.sentence, "chove se e somente se venta");
    }

    #[test]
    fn conditional() {
        let the_context = Context::default();
        let report = the_context.formula_to_sentence("p -> ¬r", &weather()).unwrap();
        assert_eq!(report.sentence, "Se chove, então não faz frio");

        let report = the_context.formula_to_sentence("P → Q", &weather()).unwrap();
        assert_eq!(report.sentence, "Se chove, então venta");
    }

    #[test]
    fn flattened_disjunction() {
        let the_context = Context::default();
        let report = the_context.formula_to_sentence("(p v q) v r", &weather()).unwrap();
        assert_eq!(
            report.expression,
            Expression::Or(vec![
                Expression::Symbol('P'),
                Expression::Symbol('Q'),
                Expression::Symbol('R')
            ])
        );
        assert_eq!(report.sentence, "chove ou venta ou faz frio");
    }
}

mod symbols {
    use super::*;

    #[test]
    fn unmapped_symbol() {
        let the_context = Context::default();
        let report = the_context.formula_to_sentence("p ^ s", &weather()).unwrap();
        assert_eq!(report.sentence, "chove e s");
    }

    #[test]
    fn case_insensitive_keys() {
        let the_context = Context::default();
        let mapping = SymbolMapping::from_pairs([("p", "chove"), ("q", "venta")]);
        let report = the_context.formula_to_sentence("P | Q", &mapping).unwrap();
        assert_eq!(report.sentence, "chove ou venta");
    }

    #[test]
    fn v_as_symbol() {
        let the_context = Context::default();
        let mapping = SymbolMapping::from_pairs([("P", "chove"), ("V", "venta")]);

        let report = the_context.formula_to_sentence("v ^ p", &mapping).unwrap();
        assert_eq!(report.sentence, "venta e chove");

        let report = the_context.formula_to_sentence("p v v", &mapping).unwrap();
        assert_eq!(report.sentence, "chove ou venta");
    }
}

mod errors {
    use super::*;

    #[test]
    fn empty_formula() {
        let the_context = Context::default();
        let result = the_context.formula_to_sentence(" ", &weather());
        assert_eq!(
            result,
            Err(err::ErrorKind::InvalidInput(err::InputError::EmptyFormula))
        );
        assert_eq!(result.unwrap_err().to_string(), "empty formula");
    }

    #[test]
    fn empty_mapping() {
        let the_context = Context::default();
        let result = the_context.formula_to_sentence("p", &SymbolMapping::default());
        assert_eq!(result.unwrap_err().to_string(), "empty or missing mapping");
    }

    #[test]
    fn malformed() {
        let the_context = Context::default();

        let result = the_context.formula_to_sentence("p ^", &weather());
        assert_eq!(
            result,
            Err(err::ErrorKind::MalformedFormula(ParseError::UnexpectedEnd))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "malformed formula: unexpected end of formula"
        );

        let result = the_context.formula_to_sentence("p ^ 2", &weather());
        assert_eq!(
            result,
            Err(err::ErrorKind::MalformedFormula(ParseError::UnknownToken('2', 2)))
        );

        let result = the_context.formula_to_sentence("(p ^ q", &weather());
        assert_eq!(
            result,
            Err(err::ErrorKind::MalformedFormula(ParseError::UnbalancedParentheses))
        );
    }
}
