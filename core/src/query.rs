use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::index::Index;
use crate::tokenizer::tokenize;

/// How a query string is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Explicit operators: operands separated by literal `" AND "` /
    /// `" OR "`, a leading `"NOT "` negates an operand against the document
    /// universe. Reduction is strictly left-to-right, no precedence, no
    /// parentheses. Operands are lowercased and stemmed but NOT
    /// stopword-filtered (a deliberate asymmetry with indexing). The
    /// default, since it generalizes implicit AND.
    #[default]
    Boolean,
    /// The query is tokenized like a document and every surviving term is
    /// intersected, seeded with the full document universe. Stopwords are
    /// skipped; an empty term list returns the full universe.
    ImplicitAnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
}

pub(crate) fn evaluate(index: &Index, query: &str, mode: QueryMode) -> Result<HashSet<String>> {
    match mode {
        QueryMode::Boolean => evaluate_boolean(index, query),
        QueryMode::ImplicitAnd => Ok(evaluate_implicit(index, query)),
    }
}

fn evaluate_implicit(index: &Index, query: &str) -> HashSet<String> {
    let mut results = index.universe().clone();
    for token in tokenize(query) {
        let lowered = token.to_lowercase();
        if index.normalizer().is_stopword(&lowered) {
            continue;
        }
        let stemmed = index.normalizer().fold(&lowered);
        match index.postings(&stemmed) {
            Some(postings) => results.retain(|doc| postings.contains(doc)),
            None => results.clear(),
        }
    }
    results
}

fn evaluate_boolean(index: &Index, query: &str) -> Result<HashSet<String>> {
    let (operands, ops) = split_boolean(query)?;
    let mut operands = operands.into_iter();
    // split_boolean guarantees operands.len() == ops.len() + 1
    let first = operands.next().expect("at least one operand");
    let mut result = operand_set(index, first)?;
    for (op, operand) in ops.into_iter().zip(operands) {
        let rhs = operand_set(index, operand)?;
        match op {
            Op::And => result.retain(|doc| rhs.contains(doc)),
            Op::Or => result.extend(rhs),
        }
    }
    Ok(result)
}

/// Split on the literal separators `" AND "` and `" OR "`, left to right,
/// into an alternating operand/operator sequence.
fn split_boolean(query: &str) -> Result<(Vec<&str>, Vec<Op>)> {
    let mut operands = Vec::new();
    let mut ops = Vec::new();
    let mut rest = query;
    loop {
        let and_at = rest.find(" AND ");
        let or_at = rest.find(" OR ");
        let (at, sep_len, op) = match (and_at, or_at) {
            (Some(a), Some(o)) if a <= o => (a, " AND ".len(), Op::And),
            (Some(_), Some(o)) => (o, " OR ".len(), Op::Or),
            (Some(a), None) => (a, " AND ".len(), Op::And),
            (None, Some(o)) => (o, " OR ".len(), Op::Or),
            (None, None) => break,
        };
        operands.push(&rest[..at]);
        ops.push(op);
        rest = &rest[at + sep_len..];
    }
    operands.push(rest);
    for operand in &operands {
        if operand.trim().is_empty() {
            return Err(Error::Query(format!(
                "empty operand in {query:?} (dangling or doubled operator?)"
            )));
        }
    }
    Ok((operands, ops))
}

fn operand_set(index: &Index, operand: &str) -> Result<HashSet<String>> {
    if let Some(term) = operand.strip_prefix("NOT ") {
        let postings = index.find_by_term(term);
        Ok(index
            .universe()
            .iter()
            .filter(|doc| !postings.contains(*doc))
            .cloned()
            .collect())
    } else {
        Ok(index.find_by_term(operand))
    }
}
