/*
[INPUT]:  Account numbers, bank codes, card BINs and identity documents
[OUTPUT]: Account and card lookups
[POS]:    Resource layer - /bank/resolve, /bank/validate and /decision endpoints
[UPDATE]: When verification endpoints change
*/

use crate::http::{ApiRequest, Query, Transport};
use crate::types::{AccountResolution, AccountValidation, CardBin, ValidateAccount};

resource!(
    /// Know-your-customer lookups
    Verification
);

impl<X: Transport> Verification<'_, X> {
    /// Confirm the account name behind an account number
    ///
    /// GET /bank/resolve?account_number=..&bank_code=..
    pub fn resolve_account(&self, account_number: &str, bank_code: &str) -> X::Output<AccountResolution> {
        let path = Query::new()
            .push("account_number", Some(account_number))
            .push("bank_code", Some(bank_code))
            .to_path("/bank/resolve");
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// POST /bank/validate
    pub fn validate_account(&self, params: &ValidateAccount) -> X::Output<AccountValidation> {
        self.transport
            .dispatch(ApiRequest::post("/bank/validate").json(params))
    }

    /// GET /decision/bin/{bin}
    pub fn resolve_card_bin(&self, bin: &str) -> X::Output<CardBin> {
        self.transport
            .dispatch(Ok(ApiRequest::get(endpoint!("/decision/bin/{}", bin))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Api;
    use crate::resources::test_support::client;
    use crate::types::{AccountType, DocumentType};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resolve_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bank/resolve"))
            .and(query_param("account_number", "0022728151"))
            .and(query_param("bank_code", "063"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Account number resolved",
                "data": { "account_number": "0022728151", "account_name": "WES GIBSONS" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .verification()
            .resolve_account("0022728151", "063")
            .await
            .expect("resolve should succeed");

        assert_eq!(response.data.expect("data").account_name, "WES GIBSONS");
    }

    #[tokio::test]
    async fn test_validate_account_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bank/validate"))
            .and(body_json(json!({
                "account_name": "Ann Bron",
                "account_number": "0123456789",
                "account_type": "personal",
                "bank_code": "632005",
                "country_code": "ZA",
                "document_type": "identityNumber",
                "document_number": "1234567890123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Personal Account Verification attempted",
                "data": { "verified": true, "verificationMessage": "Account is verified successfully" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ValidateAccount {
            account_name: "Ann Bron".to_string(),
            account_number: "0123456789".to_string(),
            account_type: AccountType::Personal,
            bank_code: "632005".to_string(),
            country_code: "ZA".to_string(),
            document_type: DocumentType::IdentityNumber,
            document_number: Some("1234567890123".to_string()),
        };
        let response = client(&server)
            .verification()
            .validate_account(&params)
            .await
            .expect("validate should succeed");

        assert!(response.data.expect("data").verified);
    }
}
