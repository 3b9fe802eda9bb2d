//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, parse_macro_input};

/// Derive `Solver` from a set of `PartSolver<N>` implementations.
///
/// `#[solver(parts = N)]` is required; parts `1..=N` must each have a
/// `PartSolver<N>` implementation.
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[solver(parts = 2)]
/// pub struct Solver;
///
/// impl PartSolver<1> for Solver { /* ... */ }
/// impl PartSolver<2> for Solver { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(solver))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Reads `parts = N` out of `#[solver(...)]`.
fn solver_parts(input: &DeriveInput) -> syn::Result<u8> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(&input.ident, "PuzzleSolver requires #[solver(parts = N)]")
        })?;

    let mut parts = None;
    attr.parse_nested_meta(|meta| {
        if !meta.path.is_ident("parts") {
            return Err(meta.error("expected `parts = N`"));
        }
        let value: LitInt = meta.value()?.parse()?;
        parts = Some(value.base10_parse::<u8>()?);
        Ok(())
    })?;

    match parts {
        None => Err(syn::Error::new_spanned(attr, "missing `parts = N`")),
        Some(0) => Err(syn::Error::new_spanned(attr, "a solver needs at least one part")),
        Some(parts) => Ok(parts),
    }
}

fn expand_puzzle_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let parts = solver_parts(input)?;
    let numbers = 1..=parts;

    Ok(quote! {
        impl ::puzzle_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                input: &mut <Self as ::puzzle_solver::PuzzleParser>::Input<'_>,
                part: u8,
            ) -> ::std::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#numbers => <Self as ::puzzle_solver::PartSolver<#numbers>>::solve(input),)*
                    _ => ::std::result::Result::Err(
                        ::puzzle_solver::SolveError::PartOutOfRange(part),
                    ),
                }
            }
        }
    })
}

/// Derive macro that submits a solver to the plugin registry.
///
/// # Attributes
///
/// - `year`: Required. The puzzle year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. String literals used for filtering (e.g., ["grid", "memo"])
///
/// The type must implement `Solver`; otherwise compilation fails with an
/// unsatisfied `MustImplementSolver` bound pointing at the type.
///
/// # Example
///
/// ```ignore
/// #[derive(PuzzleSolver, AutoRegisterSolver)]
/// #[solver(parts = 2)]
/// #[puzzle(year = 2023, day = 10, tags = ["grid", "pipes"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(puzzle))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new_spanned(name, "AutoRegisterSolver requires #[puzzle(...)]")
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            day = Some(value.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported puzzle attribute"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'year'"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'day'"))?;
    let tag_strs = tags.iter().map(String::as_str);

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::puzzle_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    })
}
