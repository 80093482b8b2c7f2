//! Abstract Syntax Tree definitions for TanglawPL
//!
//! This module defines all AST node types. The tree is owned top-down: every node exclusively owns its children and
//! there are no parent links.
//!
//! ## Notes
//! - Statements and expressions are wrapped in [`Spanned`] so diagnostics can point at them.
//! - [`Program`]'s `Display` prints an indented tree (`└──` / `├──`), one node per line, named by [`NodeKind`].

use std::fmt;

use tanglaw_core::lang::operators::{self, OperatorId};
use tanglaw_core::lang::reserved::{self, ReservedCategory, ReservedWordId};
use tanglaw_core::lang::types::{DataTypeId, LiteralKind};

pub use crate::source::Span;

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier spelling.
pub type Ident = String;

/// A program is a sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
    Assignment(Assignment),
    Conditional(ConditionalStatement),
    While(WhileLoop),
    For(ForLoop),
    Repeat(RepeatLoop),
    Output(OutputStatement),
    Input,
    Call(FunctionCall),
    /// Bare expression, including `x++;`.
    Expression(Spanned<Expr>),
}

/// `int a, b cm = 2;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub data_type: DataTypeId,
    pub declarators: Vec<Spanned<Declarator>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    pub name: Ident,
    pub unit: Option<Spanned<UnitSpecifier>>,
    pub initializer: Option<Spanned<Expr>>,
}

/// `cm` or `sq cm` after a declarator name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpecifier {
    pub unit: ReservedWordId,
    pub squared: bool,
}

/// `target op value`, where `op` is any assignment-class operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// An [`Expr::Identifier`] or [`Expr::MemberAccess`].
    pub target: Spanned<Expr>,
    pub operator: OperatorId,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalStatement {
    pub if_clause: Spanned<IfClause>,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Spanned<Expr>,
    pub block: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    Block(Block),
    /// `else if ...`
    If(Box<Spanned<ConditionalStatement>>),
}

/// `{ statement* }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Spanned<Expr>,
    pub body: Block,
}

/// `for (init; condition; update) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// A declaration, assignment, call or `x++`-style expression.
    pub init: Box<Spanned<Statement>>,
    pub condition: Spanned<Expr>,
    /// An assignment or an increment/decrement expression.
    pub update: Box<Spanned<Statement>>,
    pub body: Block,
}

/// `repeat count times body`
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatLoop {
    pub count: Spanned<Expr>,
    pub body: Block,
}

/// `print("...", {a} {b.c});` / `println(...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputStatement {
    pub newline: bool,
    pub template: String,
    pub placeholders: Vec<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// An [`Expr::Identifier`] or [`Expr::MemberAccess`].
    pub callee: Box<Spanned<Expr>>,
    pub args: Vec<Spanned<Expr>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(Ident),
    /// `a.b.c`; always at least two segments.
    MemberAccess(Vec<Ident>),
    /// Arithmetic, relational and bitwise operators.
    Binary(Box<Spanned<Expr>>, OperatorId, Box<Spanned<Expr>>),
    /// `&&` and `||`.
    Logical(Box<Spanned<Expr>>, OperatorId, Box<Spanned<Expr>>),
    Unary {
        operator: OperatorId,
        operand: Box<Spanned<Expr>>,
        /// `x++` rather than `++x`.
        postfix: bool,
    },
    Call(FunctionCall),
    /// `( expr )`
    Grouped(Box<Spanned<Expr>>),
    /// A reserved word applied to arguments: `areaOf(circle(5))`, `cm(3)`.
    Reserved(ReservedCall),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    String(String),
    Character(char),
    Boolean(bool),
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::Integer(_) => LiteralKind::Integer,
            Literal::Real(_) => LiteralKind::Real,
            Literal::String(_) => LiteralKind::String,
            Literal::Character(_) => LiteralKind::Character,
            Literal::Boolean(_) => LiteralKind::Boolean,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(v) => write!(f, "{v}"),
            Literal::Real(v) => write!(f, "{v:?}"),
            Literal::String(s) => write!(f, "{s:?}"),
            Literal::Character(c) => write!(f, "{c:?}"),
            Literal::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Which reserved-word form a [`ReservedCall`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedForm {
    GeometricCalculation,
    Shape,
    Measurement,
    Unit,
    Fetch,
    SetPrecision,
    Cubic,
}

impl ReservedForm {
    /// Form a reserved word dispatches to. `sq` is a unit form.
    pub fn of(word: ReservedWordId) -> Self {
        match reserved::category(word) {
            ReservedCategory::Geometry => ReservedForm::GeometricCalculation,
            ReservedCategory::Shape => ReservedForm::Shape,
            ReservedCategory::Measurement => ReservedForm::Measurement,
            ReservedCategory::Unit | ReservedCategory::UnitModifier => ReservedForm::Unit,
            ReservedCategory::Fetch => ReservedForm::Fetch,
            ReservedCategory::SetPrecision => ReservedForm::SetPrecision,
            ReservedCategory::Cubic => ReservedForm::Cubic,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReservedCall {
    pub form: ReservedForm,
    pub word: ReservedWordId,
    pub args: Vec<Spanned<Expr>>,
}

// ============================================================================
// Tree dump
// ============================================================================

/// Node names used by the tree dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    VariableDeclaration,
    Declarator,
    Assignment,
    ConditionalStatement,
    IfClause,
    Block,
    WhileLoop,
    ForLoop,
    RepeatLoop,
    OutputStatement,
    InputStatement,
    FunctionCall,
    BinaryOp,
    LogicalOp,
    UnaryOp,
    Literal,
    Identifier,
    MemberAccess,
    UnitSpecifier,
    GeometricCalculation,
    Shape,
    Measurement,
    Unit,
    FetchOperation,
    SetPrecision,
    CubicOperation,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::Declarator => "Declarator",
            NodeKind::Assignment => "Assignment",
            NodeKind::ConditionalStatement => "ConditionalStatement",
            NodeKind::IfClause => "IfClause",
            NodeKind::Block => "Block",
            NodeKind::WhileLoop => "WhileLoop",
            NodeKind::ForLoop => "ForLoop",
            NodeKind::RepeatLoop => "RepeatLoop",
            NodeKind::OutputStatement => "OutputStatement",
            NodeKind::InputStatement => "InputStatement",
            NodeKind::FunctionCall => "FunctionCall",
            NodeKind::BinaryOp => "BinaryOp",
            NodeKind::LogicalOp => "LogicalOp",
            NodeKind::UnaryOp => "UnaryOp",
            NodeKind::Literal => "Literal",
            NodeKind::Identifier => "Identifier",
            NodeKind::MemberAccess => "MemberAccess",
            NodeKind::UnitSpecifier => "UnitSpecifier",
            NodeKind::GeometricCalculation => "GeometricCalculation",
            NodeKind::Shape => "Shape",
            NodeKind::Measurement => "Measurement",
            NodeKind::Unit => "Unit",
            NodeKind::FetchOperation => "FetchOperation",
            NodeKind::SetPrecision => "SetPrecision",
            NodeKind::CubicOperation => "CubicOperation",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Statement::Assignment(_) => NodeKind::Assignment,
            Statement::Conditional(_) => NodeKind::ConditionalStatement,
            Statement::While(_) => NodeKind::WhileLoop,
            Statement::For(_) => NodeKind::ForLoop,
            Statement::Repeat(_) => NodeKind::RepeatLoop,
            Statement::Output(_) => NodeKind::OutputStatement,
            Statement::Input => NodeKind::InputStatement,
            Statement::Call(_) => NodeKind::FunctionCall,
            Statement::Expression(e) => e.node.kind(),
        }
    }
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Literal(_) => NodeKind::Literal,
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::MemberAccess(_) => NodeKind::MemberAccess,
            Expr::Binary(..) => NodeKind::BinaryOp,
            Expr::Logical(..) => NodeKind::LogicalOp,
            Expr::Unary { .. } => NodeKind::UnaryOp,
            Expr::Call(_) => NodeKind::FunctionCall,
            Expr::Grouped(inner) => inner.node.kind(),
            Expr::Reserved(call) => match call.form {
                ReservedForm::GeometricCalculation => NodeKind::GeometricCalculation,
                ReservedForm::Shape => NodeKind::Shape,
                ReservedForm::Measurement => NodeKind::Measurement,
                ReservedForm::Unit => NodeKind::Unit,
                ReservedForm::Fetch => NodeKind::FetchOperation,
                ReservedForm::SetPrecision => NodeKind::SetPrecision,
                ReservedForm::Cubic => NodeKind::CubicOperation,
            },
        }
    }

    /// Dotted spelling of an identifier or member-access path.
    pub fn path(&self) -> Option<String> {
        match self {
            Expr::Identifier(name) => Some(name.clone()),
            Expr::MemberAccess(segments) => Some(segments.join(".")),
            _ => None,
        }
    }
}

/// Owned view of one tree-dump line and its children.
struct TreeNode {
    kind: NodeKind,
    value: Option<String>,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(kind: NodeKind, value: Option<String>, children: Vec<TreeNode>) -> Self {
        Self { kind, value, children }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, level: usize, is_last: bool) -> fmt::Result {
        let branch = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}{}", "    ".repeat(level), branch, self.kind)?;
        if let Some(value) = &self.value {
            write!(f, ": {value}")?;
        }
        writeln!(f)?;
        for (i, child) in self.children.iter().enumerate() {
            child.write(f, level + 1, i + 1 == self.children.len())?;
        }
        Ok(())
    }
}

fn block_tree(block: &Block) -> TreeNode {
    TreeNode::new(
        NodeKind::Block,
        None,
        block.statements.iter().map(|s| statement_tree(&s.node)).collect(),
    )
}

fn conditional_tree(cond: &ConditionalStatement) -> TreeNode {
    let clause = &cond.if_clause.node;
    let mut children = vec![TreeNode::new(
        NodeKind::IfClause,
        None,
        vec![expr_tree(&clause.condition.node), block_tree(&clause.block)],
    )];
    match &cond.else_branch {
        Some(ElseBranch::Block(block)) => children.push(block_tree(block)),
        Some(ElseBranch::If(nested)) => children.push(conditional_tree(&nested.node)),
        None => {}
    }
    TreeNode::new(NodeKind::ConditionalStatement, None, children)
}

fn call_tree(call: &FunctionCall) -> TreeNode {
    TreeNode::new(
        NodeKind::FunctionCall,
        call.callee.node.path(),
        call.args.iter().map(|a| expr_tree(&a.node)).collect(),
    )
}

fn statement_tree(stmt: &Statement) -> TreeNode {
    match stmt {
        Statement::VariableDeclaration(decl) => TreeNode::new(
            NodeKind::VariableDeclaration,
            Some(decl.data_type.to_string()),
            decl.declarators
                .iter()
                .map(|d| {
                    let d = &d.node;
                    let mut children = Vec::new();
                    if let Some(unit) = &d.unit {
                        let spelling = reserved::as_str(unit.node.unit);
                        let value = if unit.node.squared {
                            format!("sq {spelling}")
                        } else {
                            spelling.to_string()
                        };
                        children.push(TreeNode::new(NodeKind::UnitSpecifier, Some(value), Vec::new()));
                    }
                    if let Some(init) = &d.initializer {
                        children.push(expr_tree(&init.node));
                    }
                    TreeNode::new(NodeKind::Declarator, Some(d.name.clone()), children)
                })
                .collect(),
        ),
        Statement::Assignment(assign) => TreeNode::new(
            NodeKind::Assignment,
            Some(operators::as_str(assign.operator).to_string()),
            vec![expr_tree(&assign.target.node), expr_tree(&assign.value.node)],
        ),
        Statement::Conditional(cond) => conditional_tree(cond),
        Statement::While(w) => TreeNode::new(
            NodeKind::WhileLoop,
            None,
            vec![expr_tree(&w.condition.node), block_tree(&w.body)],
        ),
        Statement::For(f) => TreeNode::new(
            NodeKind::ForLoop,
            None,
            vec![
                statement_tree(&f.init.node),
                expr_tree(&f.condition.node),
                statement_tree(&f.update.node),
                block_tree(&f.body),
            ],
        ),
        Statement::Repeat(r) => TreeNode::new(
            NodeKind::RepeatLoop,
            None,
            vec![expr_tree(&r.count.node), block_tree(&r.body)],
        ),
        Statement::Output(out) => TreeNode::new(
            NodeKind::OutputStatement,
            Some(format!(
                "{} {:?}",
                if out.newline { "println" } else { "print" },
                out.template
            )),
            out.placeholders.iter().map(|p| expr_tree(&p.node)).collect(),
        ),
        Statement::Input => TreeNode::new(NodeKind::InputStatement, None, Vec::new()),
        Statement::Call(call) => call_tree(call),
        Statement::Expression(expr) => expr_tree(&expr.node),
    }
}

fn expr_tree(expr: &Expr) -> TreeNode {
    match expr {
        Expr::Literal(lit) => TreeNode::new(NodeKind::Literal, Some(lit.to_string()), Vec::new()),
        Expr::Identifier(name) => TreeNode::new(NodeKind::Identifier, Some(name.clone()), Vec::new()),
        Expr::MemberAccess(segments) => TreeNode::new(NodeKind::MemberAccess, Some(segments.join(".")), Vec::new()),
        Expr::Binary(lhs, op, rhs) | Expr::Logical(lhs, op, rhs) => TreeNode::new(
            expr.kind(),
            Some(operators::as_str(*op).to_string()),
            vec![expr_tree(&lhs.node), expr_tree(&rhs.node)],
        ),
        Expr::Unary {
            operator,
            operand,
            postfix,
        } => {
            let spelling = operators::as_str(*operator);
            let value = if *postfix {
                format!("{spelling} (postfix)")
            } else {
                spelling.to_string()
            };
            TreeNode::new(NodeKind::UnaryOp, Some(value), vec![expr_tree(&operand.node)])
        }
        Expr::Call(call) => call_tree(call),
        Expr::Grouped(inner) => expr_tree(&inner.node),
        Expr::Reserved(call) => TreeNode::new(
            expr.kind(),
            Some(reserved::as_str(call.word).to_string()),
            call.args.iter().map(|a| expr_tree(&a.node)).collect(),
        ),
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = TreeNode::new(
            NodeKind::Program,
            None,
            self.statements.iter().map(|s| statement_tree(&s.node)).collect(),
        );
        root.write(f, 0, true)
    }
}
