use proc_macro2::TokenStream;
use syn::{parse_quote, Generics, WhereClause, WherePredicate};

/// The where clause of `generics` with `bound` added for every type
/// parameter.
pub fn where_clause_with_bound(generics: &Generics, bound: TokenStream) -> WhereClause {
    let new_predicates = generics.type_params().map::<WherePredicate, _>(|param| {
        let param = &param.ident;
        parse_quote!(#param : #bound)
    });

    let mut bounded = generics.clone();
    let where_clause = bounded.make_where_clause();
    where_clause.predicates.extend(new_predicates);
    where_clause.clone()
}
