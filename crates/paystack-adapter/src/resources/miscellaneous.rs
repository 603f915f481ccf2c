/*
[INPUT]:  Country and bank filters
[OUTPUT]: Supported banks, countries and address states
[POS]:    Resource layer - /bank, /country and /address_verification endpoints
[UPDATE]: When reference data endpoints change
*/

use crate::http::request::paginated_path;
use crate::http::{ApiRequest, Query, Transport};
use crate::types::{Bank, ListBanks, State, SupportedCountry};

resource!(
    /// Reference data
    Miscellaneous
);

impl<X: Transport> Miscellaneous<'_, X> {
    /// GET /bank?perPage=..
    pub fn banks(&self, params: &ListBanks) -> X::Output<Vec<Bank>> {
        let path = Query::new()
            .push("country", params.country)
            .push("use_cursor", params.use_cursor)
            .push("pay_with_bank_transfer", params.pay_with_bank_transfer)
            .push("pay_with_bank", params.pay_with_bank)
            .push("enabled_for_verification", params.enabled_for_verification)
            .push("next", params.next.as_deref())
            .push("previous", params.previous.as_deref())
            .push("gateway", params.gateway.as_deref())
            .push("type", params.bank_type.as_deref())
            .push("currency", params.currency)
            .append_to(&paginated_path("/bank", params.per_page));
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }

    /// Countries Paystack currently supports
    ///
    /// GET /country
    pub fn countries(&self) -> X::Output<Vec<SupportedCountry>> {
        self.transport.dispatch(Ok(ApiRequest::get("/country")))
    }

    /// States for address verification, by ISO country code
    ///
    /// GET /address_verification/states?country={code}
    pub fn states(&self, country_code: &str) -> X::Output<Vec<State>> {
        let path = Query::new()
            .push("country", Some(country_code))
            .to_path("/address_verification/states");
        self.transport.dispatch(Ok(ApiRequest::get(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Api;
    use crate::resources::test_support::client;
    use crate::types::Country;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_banks_by_country() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bank"))
            .and(query_param("perPage", "50"))
            .and(query_param("country", "south africa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "Banks retrieved",
                "data": [{ "id": 140, "name": "Absa Bank Limited", "code": "632005", "type": "basa" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = ListBanks {
            country: Some(Country::SouthAfrica),
            ..ListBanks::default()
        };
        let response = client(&server)
            .miscellaneous()
            .banks(&params)
            .await
            .expect("banks should succeed");

        let banks = response.data.expect("data");
        assert_eq!(banks[0].bank_type.as_deref(), Some("basa"));
    }

    #[tokio::test]
    async fn test_states() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/address_verification/states"))
            .and(query_param("country", "CA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": true,
                "message": "States retrieved",
                "data": [{ "name": "Alberta", "slug": "alberta", "abbreviation": "AB" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .miscellaneous()
            .states("CA")
            .await
            .expect("states should succeed");

        assert_eq!(response.data.expect("data")[0].abbreviation.as_deref(), Some("AB"));
    }
}
