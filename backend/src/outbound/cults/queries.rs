//! GraphQL documents sent to Cults3D and their variable payloads.

use serde::Serialize;

/// A named GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDocument {
    /// Operation name, used in logs.
    pub operation: &'static str,
    /// Document text.
    pub text: &'static str,
}

/// One page of the authenticated seller's creations.
pub const MY_CREATIONS: QueryDocument = QueryDocument {
    operation: "MyCreations",
    text: r"
  query MyCreations($limit: Int!, $offset: Int!, $locale: LocaleEnum!, $currency: CurrencyEnum!) {
    myself {
      creationsBatch(limit: $limit, offset: $offset) {
        total
        results {
          name(locale: $locale)
          url(locale: $locale)
          illustrationImageUrl
          downloadsCount
          viewsCount
          totalSalesAmount(currency: $currency) { cents }
          blueprints {
            fileUrl
            imageUrl
          }
        }
      }
    }
  }
",
};

/// Full record of one creation addressed by slug.
pub const CREATION_BY_SLUG: QueryDocument = QueryDocument {
    operation: "CreationBySlug",
    text: r"
  query CreationBySlug($slug: String!, $locale: LocaleEnum!, $currency: CurrencyEnum!) {
    creation(slug: $slug) {
      name(locale: $locale)
      shortUrl
      illustrationImageUrl
      license { name(locale: $locale) }
      category { name(locale: $locale) }
      publishedAt
      viewsCount
      likesCount
      downloadsCount
      tags(locale: $locale)
      price(currency: $currency) { cents }
      creator { nick shortUrl }
    }
  }
",
};

/// Public profile header of an account.
pub const USER_HEADER: QueryDocument = QueryDocument {
    operation: "UserHeader",
    text: r"
  query UserHeader($nick: String!) {
    user(nick: $nick) {
      shortUrl
      bio
      imageUrl
      creationsCount
    }
  }
",
};

/// Variables for [`MY_CREATIONS`].
#[derive(Debug, Clone, Serialize)]
pub struct MyCreationsVariables {
    /// Page size.
    pub limit: u32,
    /// Records skipped.
    pub offset: u32,
    /// `LocaleEnum` value.
    pub locale: &'static str,
    /// `CurrencyEnum` value.
    pub currency: &'static str,
}

/// Variables for [`CREATION_BY_SLUG`].
#[derive(Debug, Clone, Serialize)]
pub struct CreationBySlugVariables<'a> {
    /// Validated slug.
    pub slug: &'a str,
    /// `LocaleEnum` value.
    pub locale: &'static str,
    /// `CurrencyEnum` value.
    pub currency: &'static str,
}

/// Variables for [`USER_HEADER`].
#[derive(Debug, Clone, Serialize)]
pub struct UserHeaderVariables<'a> {
    /// Account nickname.
    pub nick: &'a str,
}

#[cfg(test)]
mod tests {
    //! Checks that documents declare the variables their payloads provide.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MY_CREATIONS, &["$limit", "$offset", "$locale", "$currency"])]
    #[case(CREATION_BY_SLUG, &["$slug", "$locale", "$currency"])]
    #[case(USER_HEADER, &["$nick"])]
    fn documents_declare_their_variables(
        #[case] document: QueryDocument,
        #[case] variables: &[&str],
    ) {
        let header = format!("query {}(", document.operation);
        assert!(document.text.contains(&header));
        for variable in variables {
            assert!(
                document.text.contains(&format!("{variable}:")),
                "{} should declare {variable}",
                document.operation
            );
        }
    }

    #[rstest]
    fn batch_variables_serialise_with_enum_spellings() {
        let variables = MyCreationsVariables {
            limit: 60,
            offset: 0,
            locale: "EN",
            currency: "USD",
        };
        let value = serde_json::to_value(variables).expect("serialise variables");
        assert_eq!(
            value,
            serde_json::json!({ "limit": 60, "offset": 0, "locale": "EN", "currency": "USD" })
        );
    }
}
