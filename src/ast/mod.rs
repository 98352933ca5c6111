
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),

    // Closures: the interpreter reports captured names alongside parameters.
    Callable {
        #[serde(default)]
        parameters: Vec<String>,
        #[serde(default)]
        captures: Vec<String>,
        body: Box<Statement>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),

    // Variable references
    Identifier(String),

    // Unary operations: negation, logical not
    Unary {
        operator: UnaryOp,
        operand: Box<Expression>,
    },

    // Binary operations: arithmetic and comparison
    Binary {
        operator: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    Assignment {
        target: String,
        value: Box<Expression>,
    },

    Call {
        callee: Box<Expression>,
        #[serde(default)]
        arguments: Vec<Expression>,
    },

    // Parenthesised expression; carries no displayable operator
    Grouping(Box<Expression>),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "-")]
    Neg,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "*")]
    Mul,

    // Comparison
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Div => "/",
            BinaryOp::Mul => "*",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::Ge => ">=",
            BinaryOp::Le => "<=",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Statement {
    // Control flow
    If {
        condition: Expression,
        then_branch: Box<Statement>,
        // Absent else is distinct from an empty block
        else_branch: Option<Box<Statement>>,
    },

    For {
        initializer: Box<Statement>,
        condition: Expression,
        increment: Expression,
        body: Box<Statement>,
    },

    While {
        condition: Expression,
        body: Box<Statement>,
    },

    Return(Expression),

    Block(Vec<Statement>),

    // Expression as statement (for side effects)
    Expression(Expression),

    Print(Expression),

    Declaration {
        name: String,
        initializer: Expression,
    },
}
