/*
[INPUT]:  Any Transport (async PaystackClient or BlockingPaystackClient)
[OUTPUT]: Per-resource wrapper handles borrowing the transport
[POS]:    Resource layer - endpoint enumeration grouped by API resource
[UPDATE]: When adding a resource group
*/

/// Declare a resource handle borrowing a transport
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<'a, X: $crate::http::Transport> {
            transport: &'a X,
        }

        impl<'a, X: $crate::http::Transport> $name<'a, X> {
            pub(crate) fn new(transport: &'a X) -> Self {
                Self { transport }
            }
        }

        impl<X: $crate::http::Transport> Clone for $name<'_, X> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<X: $crate::http::Transport> Copy for $name<'_, X> {}
    };
}

/// `format!` for endpoint paths; each argument becomes one escaped path segment
macro_rules! endpoint {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        format!($fmt $(, $crate::http::request::segment(&$arg))*)
    };
}

pub mod apple_pay;
pub mod bulk_charges;
pub mod charge;
pub mod customers;
pub mod dedicated_accounts;
pub mod disputes;
pub mod integration;
pub mod miscellaneous;
pub mod payment_pages;
pub mod payment_requests;
pub mod plans;
pub mod products;
pub mod refunds;
pub mod settlements;
pub mod subaccounts;
pub mod subscriptions;
pub mod terminals;
pub mod transaction_splits;
pub mod transactions;
pub mod transfer_control;
pub mod transfer_recipients;
pub mod transfers;
pub mod verification;

pub use apple_pay::ApplePay;
pub use bulk_charges::BulkCharges;
pub use charge::Charges;
pub use customers::Customers;
pub use dedicated_accounts::DedicatedAccounts;
pub use disputes::Disputes;
pub use integration::Integration;
pub use miscellaneous::Miscellaneous;
pub use payment_pages::PaymentPages;
pub use payment_requests::PaymentRequests;
pub use plans::Plans;
pub use products::Products;
pub use refunds::Refunds;
pub use settlements::Settlements;
pub use subaccounts::Subaccounts;
pub use subscriptions::Subscriptions;
pub use terminals::Terminals;
pub use transaction_splits::TransactionSplits;
pub use transactions::Transactions;
pub use transfer_control::TransferControl;
pub use transfer_recipients::TransferRecipients;
pub use transfers::Transfers;
pub use verification::Verification;

use crate::http::Transport;

/// Resource accessors available on every transport.
///
/// ```no_run
/// use paystack_adapter::{Api, PaystackClient};
///
/// # async fn run() -> paystack_adapter::Result<()> {
/// let client = PaystackClient::new(Some("sk_test_xxx"))?;
/// let response = client.transactions().verify("re4lyvq3s3").await?;
/// println!("{} {:?}", response.message, response.data);
/// # Ok(())
/// # }
/// ```
pub trait Api: Transport + Sized {
    fn apple_pay(&self) -> ApplePay<'_, Self> {
        ApplePay::new(self)
    }

    fn bulk_charges(&self) -> BulkCharges<'_, Self> {
        BulkCharges::new(self)
    }

    fn charge(&self) -> Charges<'_, Self> {
        Charges::new(self)
    }

    fn customers(&self) -> Customers<'_, Self> {
        Customers::new(self)
    }

    fn dedicated_accounts(&self) -> DedicatedAccounts<'_, Self> {
        DedicatedAccounts::new(self)
    }

    fn disputes(&self) -> Disputes<'_, Self> {
        Disputes::new(self)
    }

    fn integration(&self) -> Integration<'_, Self> {
        Integration::new(self)
    }

    fn miscellaneous(&self) -> Miscellaneous<'_, Self> {
        Miscellaneous::new(self)
    }

    fn payment_pages(&self) -> PaymentPages<'_, Self> {
        PaymentPages::new(self)
    }

    fn payment_requests(&self) -> PaymentRequests<'_, Self> {
        PaymentRequests::new(self)
    }

    fn plans(&self) -> Plans<'_, Self> {
        Plans::new(self)
    }

    fn products(&self) -> Products<'_, Self> {
        Products::new(self)
    }

    fn refunds(&self) -> Refunds<'_, Self> {
        Refunds::new(self)
    }

    fn settlements(&self) -> Settlements<'_, Self> {
        Settlements::new(self)
    }

    fn subaccounts(&self) -> Subaccounts<'_, Self> {
        Subaccounts::new(self)
    }

    fn subscriptions(&self) -> Subscriptions<'_, Self> {
        Subscriptions::new(self)
    }

    fn terminals(&self) -> Terminals<'_, Self> {
        Terminals::new(self)
    }

    fn transaction_splits(&self) -> TransactionSplits<'_, Self> {
        TransactionSplits::new(self)
    }

    fn transactions(&self) -> Transactions<'_, Self> {
        Transactions::new(self)
    }

    fn transfer_control(&self) -> TransferControl<'_, Self> {
        TransferControl::new(self)
    }

    fn transfer_recipients(&self) -> TransferRecipients<'_, Self> {
        TransferRecipients::new(self)
    }

    fn transfers(&self) -> Transfers<'_, Self> {
        Transfers::new(self)
    }

    fn verification(&self) -> Verification<'_, Self> {
        Verification::new(self)
    }
}

impl<X: Transport> Api for X {}
