use crate::error::{Error, Result};
use crate::types::ScrapedOffice;
use serde::Deserialize;
use serde_json::json;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const ADDRESS_PROMPT: &str = "please find all office addresses within this content, returning them in json formatting as plain text without any backticks or formatting indicators. Include the fields: address, city, state, zip, phone.
If a fax number is listed, also include it in a fax field.
If the address includes a suite number or room, include it in a suite field. Do not include it in the address field. If there is no suite, omit the suite field.
if the address includes a building, include it in a building field. Do not include it in the address field. If there is no building, omit the building field.";

pub const LOCATIONS_PROMPT: &str =
    "please return only the most likely url on this page that would list office locations without any other text";

/// Chat-completion client that turns page text into candidate office records
#[derive(Clone)]
pub struct AddressExtractor {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct AddressResponse {
    addresses: Vec<ScrapedOffice>,
}

impl AddressExtractor {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Ask the model for every office address in the page text. An empty
    /// list means the page listed none the model could find.
    pub async fn extract_offices(&self, page_text: &str) -> Result<Vec<ScrapedOffice>> {
        let content = self.complete(ADDRESS_PROMPT, page_text, true).await?;
        parse_office_response(&content)
    }

    /// Ask the model for a more likely url to find office locations on
    pub async fn locations_url(&self, page_html: &str) -> Result<String> {
        self.complete(LOCATIONS_PROMPT, page_html, false).await
    }

    async fn complete(&self, prompt: &str, content: &str, structured: bool) -> Result<String> {
        let mut request = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt },
                { "role": "user", "content": content },
            ],
        });

        // when asking for json formatted information, providing a schema
        // makes the resulting data much more reliable without having to add
        // too much extra prompt text
        if structured {
            request["response_format"] = address_response_format();
        }

        let response: ChatResponse = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(Error::Extract("model returned no choices".to_string()));
        };
        Ok(choice.message.content)
    }
}

/// Parse the model's `{"addresses": [...]}` payload
pub fn parse_office_response(content: &str) -> Result<Vec<ScrapedOffice>> {
    let response: AddressResponse = serde_json::from_str(content)
        .map_err(|e| Error::Extract(format!("malformed address response: {}", e)))?;
    Ok(response.addresses)
}

fn address_response_format() -> serde_json::Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "strict": true,
            "name": "address_response",
            "schema": {
                "type": "object",
                "properties": {
                    "addresses": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "address": {
                                    "type": "string",
                                    "description": "The street address of the office"
                                },
                                "city": {
                                    "type": "string",
                                    "description": "The city where the office is located"
                                },
                                "state": {
                                    "type": "string",
                                    "description": "The state where the office is located"
                                },
                                "zip": {
                                    "type": "string",
                                    "description": "The ZIP code of the office"
                                },
                                "phone": {
                                    "type": "string",
                                    "description": "The phone number of the office"
                                },
                                "fax": {
                                    "type": "string",
                                    "description": "The fax number of the office"
                                },
                                "suite": {
                                    "type": "string",
                                    "description": "The suite number or floor of the office"
                                },
                                "building": {
                                    "type": "string",
                                    "description": "The building that the office is in"
                                }
                            },
                            "required": [
                                "address", "city", "state", "zip",
                                "phone", "fax", "suite", "building"
                            ],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["addresses"],
                "additionalProperties": false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_office_response() {
        let content = r#"{"addresses": [{
            "address": "123 Main St",
            "city": "Albany",
            "state": "NY",
            "zip": "12207",
            "phone": "518-555-0100",
            "fax": "",
            "suite": "",
            "building": ""
        }]}"#;

        let offices = parse_office_response(content).unwrap();
        assert_eq!(offices.len(), 1);
        assert_eq!(offices[0].address, "123 Main St");
        assert_eq!(offices[0].city, "Albany");
        assert!(offices[0].suite.is_empty());
    }

    #[test]
    fn test_parse_office_response_empty_list() {
        let offices = parse_office_response(r#"{"addresses": []}"#).unwrap();
        assert!(offices.is_empty());
    }

    #[test]
    fn test_parse_office_response_malformed() {
        assert!(parse_office_response("no addresses here").is_err());
        assert!(parse_office_response(r#"{"offices": []}"#).is_err());
    }
}
