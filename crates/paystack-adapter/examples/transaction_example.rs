/*
[INPUT]:  PAYSTACK_SECRET_KEY environment variable, customer email
[OUTPUT]: Checkout URL for a new transaction and its verification status
[POS]:    Examples - transaction initialize/verify flow
[UPDATE]: When the transaction wrapper changes
*/

use paystack_adapter::*;

/// Example: start a checkout and check it afterwards
///
/// Reads the secret key from `PAYSTACK_SECRET_KEY`. Use a test key.
#[tokio::main]
async fn main() {
    println!("=== Paystack Transaction Example ===\n");

    let client = match PaystackClient::new(None) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    // 5000 NGN in kobo
    let params = InitializeTransaction::new("customer@email.com", 500_000);

    println!("Initializing transaction...");
    let reference = match client.transactions().initialize(&params).await {
        Ok(response) if response.is_success() => match response.data {
            Some(checkout) => {
                println!("✓ Checkout URL: {}", checkout.authorization_url);
                checkout.reference
            }
            None => {
                println!("✗ Response carried no data");
                return;
            }
        },
        Ok(response) => {
            println!("✗ Rejected ({}): {}", response.status_code, response.message);
            return;
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };

    println!("\nVerifying {}...", reference);
    match client.transactions().verify(&reference).await {
        Ok(response) => match response.data {
            Some(transaction) => println!("✓ Status: {:?}", transaction.status),
            None => println!("✗ {}", response.message),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Transaction example complete");
}
