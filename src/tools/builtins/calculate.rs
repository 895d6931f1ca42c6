//! Arithmetic calculator built-in tool.
//!
//! Evaluates arithmetic expressions with fasteval, a math-only expression
//! parser. Input is additionally restricted to numeric literals and the
//! operators `+ - * / ( )` before evaluation, so no identifier, function
//! call, or other expression form ever reaches the evaluator.

use crate::tools::definition::{ToolConfig, ToolDefinition, ToolExecutionFuture, ToolExecutorTrait};
use crate::tools::error::ToolError;
use serde::Deserialize;
use serde_json::{json, Value};

/// Identifier the calculator registers under.
pub const CALCULATOR_TOOL: &str = "calculator";

/// Maximum accepted expression length.
const MAX_EXPRESSION_LEN: usize = 256;

/// Calculator tool executor.
#[derive(Debug, Default, Clone)]
pub struct CalculateTool;

/// Arguments for the calculator tool.
#[derive(Debug, Deserialize)]
struct CalculateArgs {
    /// Arithmetic expression to evaluate
    expression: String,
}

impl CalculateTool {
    /// Creates a new calculator tool.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the tool configuration for registration.
    #[must_use]
    pub fn config() -> ToolConfig {
        ToolConfig::new(ToolDefinition {
            name: CALCULATOR_TOOL.to_string(),
            description: "Evaluate an arithmetic expression. Supports numeric literals, \
                          +, -, *, / and parentheses."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "expression": {
                        "type": "string",
                        "description": "Arithmetic expression to evaluate (e.g., '2 + 2', '(3 - 1) * 4')"
                    }
                },
                "required": ["expression"]
            }),
        })
    }
}

/// Checks that an expression contains only arithmetic tokens.
///
/// Permitted: digits, `.`, `+ - * / ( )`, and whitespace. Everything else
/// (letters, `^`, `%`, commas) is rejected before evaluation.
fn check_arithmetic_only(expression: &str) -> Result<(), ToolError> {
    if expression.trim().is_empty() {
        return Err(ToolError::validation_failed(
            CALCULATOR_TOOL,
            "expression cannot be empty",
        ));
    }

    if expression.len() > MAX_EXPRESSION_LEN {
        return Err(ToolError::validation_failed(
            CALCULATOR_TOOL,
            format!("expression is too long (max {MAX_EXPRESSION_LEN} characters)"),
        ));
    }

    if let Some(c) = expression
        .chars()
        .find(|c| !c.is_ascii_digit() && !c.is_whitespace() && !"+-*/().".contains(*c))
    {
        return Err(ToolError::validation_failed(
            CALCULATOR_TOOL,
            format!("expression contains non-arithmetic character '{c}'"),
        ));
    }

    Ok(())
}

/// Parses arguments out of the raw input value.
fn parse_args(args: Value) -> Result<CalculateArgs, ToolError> {
    serde_json::from_value(args)
        .map_err(|e| ToolError::validation_failed(CALCULATOR_TOOL, format!("invalid arguments: {e}")))
}

impl ToolExecutorTrait for CalculateTool {
    fn execute(&self, args: Value) -> ToolExecutionFuture {
        Box::pin(async move {
            let args = parse_args(args)?;
            check_arithmetic_only(&args.expression)?;

            // The charset check guarantees no identifiers appear, so the
            // namespace never resolves anything.
            let mut namespace = |_name: &str, _args: Vec<f64>| -> Option<f64> { None };

            let value = fasteval::ez_eval(&args.expression, &mut namespace).map_err(|e| {
                ToolError::execution_failed(
                    CALCULATOR_TOOL,
                    format!("failed to evaluate '{}': {e}", args.expression),
                )
            })?;

            // fasteval follows IEEE semantics, so 1/0 comes back as
            // infinity. The protocol treats any non-finite value as a
            // failed evaluation.
            if !value.is_finite() {
                return Err(ToolError::execution_failed(
                    CALCULATOR_TOOL,
                    format!(
                        "evaluation of '{}' produced a non-finite value (division by zero?)",
                        args.expression
                    ),
                ));
            }

            let rendered = if value.fract() == 0.0 && value.abs() < 1e15 {
                format!("{}", value as i64)
            } else {
                format!("{value}")
            };

            Ok(json!({
                "expression": args.expression,
                "result": rendered,
                "status": "success"
            }))
        })
    }

    fn validate_args(&self, args: &Value) -> Result<(), ToolError> {
        let args = parse_args(args.clone())?;
        check_arithmetic_only(&args.expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn eval(expression: &str) -> Result<Value, ToolError> {
        CalculateTool::new()
            .execute(json!({"expression": expression}))
            .await
    }

    #[tokio::test]
    async fn basic_arithmetic() {
        let result = eval("2+2").await.unwrap();
        assert_eq!(result["result"], "4");
        assert_eq!(result["status"], "success");
        assert_eq!(result["expression"], "2+2");

        let result = eval("10 - 3").await.unwrap();
        assert_eq!(result["result"], "7");

        let result = eval("6 * 7").await.unwrap();
        assert_eq!(result["result"], "42");

        let result = eval("20 / 4").await.unwrap();
        assert_eq!(result["result"], "5");
    }

    #[tokio::test]
    async fn operator_precedence_and_parentheses() {
        let result = eval("2 + 3 * 4").await.unwrap();
        assert_eq!(result["result"], "14");

        let result = eval("(2 + 3) * 4").await.unwrap();
        assert_eq!(result["result"], "20");
    }

    #[tokio::test]
    async fn fractional_results_keep_decimals() {
        let result = eval("7 / 2").await.unwrap();
        assert_eq!(result["result"], "3.5");
    }

    #[tokio::test]
    async fn division_by_zero_is_an_error() {
        let err = eval("1/0").await.unwrap_err();
        assert!(err.to_string().contains("non-finite"));
    }

    #[tokio::test]
    async fn code_like_input_is_rejected_not_evaluated() {
        let err = eval("import os").await.unwrap_err();
        assert!(err.to_string().contains("non-arithmetic"));
    }

    #[tokio::test]
    async fn function_calls_are_rejected() {
        // 'abs' would be valid fasteval input, so the charset gate must
        // reject it first.
        let err = eval("abs(-5)").await.unwrap_err();
        assert!(err.to_string().contains("non-arithmetic"));
    }

    #[tokio::test]
    async fn power_operator_is_rejected() {
        let err = eval("2 ^ 10").await.unwrap_err();
        assert!(err.to_string().contains("non-arithmetic"));
    }

    #[tokio::test]
    async fn empty_expression_is_rejected() {
        let err = eval("").await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[tokio::test]
    async fn malformed_expression_is_an_evaluation_error() {
        let err = eval("(").await.unwrap_err();
        assert!(err.to_string().contains("failed to evaluate"));
    }

    #[tokio::test]
    async fn overlong_expression_is_rejected() {
        let expr = "1+".repeat(200) + "1";
        let err = eval(&expr).await.unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn validate_args_rejects_missing_expression() {
        let tool = CalculateTool::new();
        assert!(tool.validate_args(&json!({})).is_err());
        assert!(tool.validate_args(&json!({"expression": "1+1"})).is_ok());
    }

    #[test]
    fn config_has_expected_identifier() {
        let config = CalculateTool::config();
        assert_eq!(config.definition.name, "calculator");
        assert!(config.definition.input_schema["properties"]["expression"].is_object());
    }
}
