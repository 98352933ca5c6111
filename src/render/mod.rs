
use crate::ast::{Expression, Literal, Statement};

/// One node of the visual tree: an optional label drawn above its
/// children, children in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayNode {
    pub label: Option<String>,
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            children: Vec::new(),
        }
    }

    pub fn branch(label: impl Into<String>, children: Vec<DisplayNode>) -> Self {
        Self {
            label: Some(label.into()),
            children,
        }
    }

    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

pub fn render_program(statements: &[Statement]) -> Vec<DisplayNode> {
    statements.iter().map(render_statement).collect()
}

pub fn render_expression(expression: &Expression) -> DisplayNode {
    match expression {
        Expression::Literal(literal) => render_literal(literal),

        Expression::Identifier(name) => DisplayNode::leaf(name),

        Expression::Unary { operator, operand } => {
            DisplayNode::branch(operator.symbol(), vec![render_expression(operand)])
        }

        Expression::Binary {
            operator,
            left,
            right,
        } => DisplayNode::branch(
            operator.symbol(),
            vec![render_expression(left), render_expression(right)],
        ),

        Expression::Assignment { target, value } => DisplayNode::branch(
            "=",
            vec![DisplayNode::leaf(target), render_expression(value)],
        ),

        Expression::Call { callee, arguments } => {
            let mut children = vec![render_expression(callee)];
            children.extend(arguments.iter().map(render_expression));
            DisplayNode::branch("call", children)
        }

        // Grouping never becomes a node of its own
        Expression::Grouping(inner) => render_expression(inner),
    }
}

pub fn render_statement(statement: &Statement) -> DisplayNode {
    match statement {
        Statement::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let mut children = vec![render_expression(condition), render_statement(then_branch)];
            // Absent else must not render a placeholder child
            if let Some(else_branch) = else_branch {
                children.push(render_statement(else_branch));
            }
            DisplayNode::branch("if / else", children)
        }

        Statement::For {
            initializer,
            condition,
            increment,
            body,
        } => DisplayNode::branch(
            "for",
            vec![
                render_statement(initializer),
                render_expression(condition),
                render_expression(increment),
                render_statement(body),
            ],
        ),

        Statement::While { condition, body } => DisplayNode::branch(
            "while",
            vec![render_expression(condition), render_statement(body)],
        ),

        Statement::Return(value) => DisplayNode::branch("ret", vec![render_expression(value)]),

        Statement::Block(body) => {
            DisplayNode::branch("{}", body.iter().map(render_statement).collect())
        }

        // Expression statements render as their inner expression, unwrapped
        Statement::Expression(value) => render_expression(value),

        Statement::Print(value) => DisplayNode::branch("print", vec![render_expression(value)]),

        Statement::Declaration { name, initializer } => DisplayNode::branch(
            ":=",
            vec![DisplayNode::leaf(name), render_expression(initializer)],
        ),
    }
}

fn render_literal(literal: &Literal) -> DisplayNode {
    match literal {
        Literal::Number(value) => DisplayNode::leaf(format_number(*value)),
        Literal::String(value) => DisplayNode::leaf(format!("\"{value}\"")),
        Literal::Bool(value) => DisplayNode::leaf(value.to_string()),

        Literal::Callable {
            parameters,
            captures,
            body,
        } => DisplayNode::branch(
            "fn",
            vec![
                DisplayNode::leaf(bracketed(parameters)),
                DisplayNode::leaf(bracketed(captures)),
                render_statement(body),
            ],
        ),
    }
}

// Integral values print without a fractional part: 5, not 5.0
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn bracketed(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}
