use soroban_sdk::contracterror;

/// Panic message used when the constructor receives a deadline whose
/// deposit cut-off or claim opening cannot be represented.
pub const ERR_DEADLINE_OUT_OF_RANGE: &str = "deadline out of range";
/// Panic message used when lock parameters are read before construction.
pub const ERR_NOT_INITIALIZED: &str = "not initialized";

/// @title  Error
/// @notice Error codes surfaced by the contract entry points.
/// @dev    `validate` only ever reports `Rejected`: every failed check is
///         indistinguishable to the caller. Codes are wire-stable.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The spend does not satisfy the lock rules.
    Rejected = 1,
    /// `quote_deposit` inputs overflow the amount type.
    Overflow = 2,
}

/// @title  RejectionCategory
/// @notice Groups rejection reasons by the rule family that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionCategory {
    /// Script purpose and own-input binding (codes 1-99).
    Context,
    /// Validity interval checks (codes 100-199).
    Timing,
    /// Input/output counts and output shapes (codes 200-299).
    Shape,
    /// Issuer and record-state authorization (codes 300-399).
    Authorization,
    /// Checked arithmetic (codes 700-799).
    Arithmetic,
}

/// @title  Rejection
/// @notice Internal reason a spend was rejected.
/// @dev    Never crosses the contract boundary; the entry point collapses
///         every variant into `Error::Rejected`. Codes are kept stable so
///         diagnostics and tests can match on them.
///
/// Code Layout:
///   1  -  99  : Context
///   100 - 199 : Timing
///   200 - 299 : Shape
///   300 - 399 : Authorization
///   700 - 799 : Arithmetic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Rejection {
    // --- Context (1-99) ---
    /// The validator was invoked for something other than spending an output.
    NotSpending = 1,
    /// `Deposit` carried an input index other than 0 or 1.
    InvalidInputIndex = 2,
    /// The input selected by the redeemer is not the input being validated.
    OwnInputMismatch = 3,

    // --- Timing (100-199) ---
    /// A validity bound needed as a finite time point is infinite.
    UnboundedValidity = 100,
    /// The transaction may still be valid after the deposit cut-off.
    DepositWindowClosed = 101,
    /// The transaction may be valid before claims open.
    ClaimWindowNotOpen = 102,

    // --- Shape (200-299) ---
    /// Wrong number of transaction inputs.
    InputCount = 200,
    /// Wrong number of transaction outputs.
    OutputCount = 201,
    /// The two deposit outputs do not match the pool and user roles.
    DepositOutputsMismatch = 202,
    /// The claim output does not pay the recorded user address.
    WrongDestination = 203,

    // --- Authorization (300-399) ---
    /// Some output of an issuer sweep is not addressed to the issuer.
    OutputNotToIssuer = 300,
    /// The issuer credential is not among the required signatories.
    MissingIssuerSignature = 301,
    /// `Deposit` was requested against an already rewarded unit.
    RedepositForbidden = 302,

    // --- Arithmetic (700-799) ---
    /// Checked arithmetic on amounts or times overflowed.
    Overflow = 700,
}

/// @title  RejectionExt
/// @notice Provides category() and description() on every Rejection variant.
pub trait RejectionExt {
    /// @return The RejectionCategory bucket this reason belongs to.
    fn category(&self) -> RejectionCategory;

    /// @return A static string description safe for display.
    fn description(&self) -> &'static str;
}

impl RejectionExt for Rejection {
    fn category(&self) -> RejectionCategory {
        match self {
            Rejection::NotSpending
            | Rejection::InvalidInputIndex
            | Rejection::OwnInputMismatch => RejectionCategory::Context,

            Rejection::UnboundedValidity
            | Rejection::DepositWindowClosed
            | Rejection::ClaimWindowNotOpen => RejectionCategory::Timing,

            Rejection::InputCount
            | Rejection::OutputCount
            | Rejection::DepositOutputsMismatch
            | Rejection::WrongDestination => RejectionCategory::Shape,

            Rejection::OutputNotToIssuer
            | Rejection::MissingIssuerSignature
            | Rejection::RedepositForbidden => RejectionCategory::Authorization,

            Rejection::Overflow => RejectionCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Rejection::NotSpending => "Script purpose is not spending",
            Rejection::InvalidInputIndex => "Deposit input index must be 0 or 1",
            Rejection::OwnInputMismatch => "Selected input is not the input being spent",
            Rejection::UnboundedValidity => "Validity bound must be finite",
            Rejection::DepositWindowClosed => "Deposits close one hour before the deadline",
            Rejection::ClaimWindowNotOpen => "Claims open one day after the deadline",
            Rejection::InputCount => "Unexpected number of transaction inputs",
            Rejection::OutputCount => "Unexpected number of transaction outputs",
            Rejection::DepositOutputsMismatch => {
                "Deposit outputs do not match the pool and user expectations"
            }
            Rejection::WrongDestination => "Claim output is not paid to the recorded user",
            Rejection::OutputNotToIssuer => "Every sweep output must pay the issuer",
            Rejection::MissingIssuerSignature => "Issuer signature is missing",
            Rejection::RedepositForbidden => "Rewarded units cannot be deposited again",
            Rejection::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

impl From<Rejection> for Error {
    fn from(_: Rejection) -> Self {
        Error::Rejected
    }
}
