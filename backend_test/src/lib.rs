use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, FnArg, Ident, ItemFn, Pat, Signature, Type};

/// Transform an asynchronous test into a synchronous one and inject a
/// [`rocket::local::asynchronous::Client`] connected to a fresh server.
///
/// By default the server's poll starts empty. Pass `seeded` to start from the
/// sample options and votes instead: `#[backend_test(seeded)]`.
#[proc_macro_attribute]
pub fn backend_test(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    // Extract the arguments to inject and reject invalid function signatures.
    let test_args = match check_sig(item_fn.sig.clone()) {
        Ok(args) => args,
        Err(err) => {
            return err.into_compile_error().into();
        }
    };

    // Rename the future so the test can have its original name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_fut", name);
    item_fn.sig.ident = new_name.clone();

    // Choose the initial poll contents.
    let arg = parse_macro_input!(args as Option<Ident>);
    let store = match arg {
        None => quote! { crate::model::poll::PollStore::new() },
        Some(arg) if arg == "seeded" => quote! {
            {
                let mut store = crate::model::poll::PollStore::new();
                store.seed(&crate::model::seed::SeedSpec::sample());
                store
            }
        },
        Some(arg) => {
            return syn::Error::new(arg.span(), "Expected no argument or `seeded`")
                .into_compile_error()
                .into();
        }
    };

    // Rewrite the test function.
    quote! {
        #[test]
        fn #name() {
            /// Test setup.
            async fn setup() -> rocket::local::asynchronous::Client {
                rocket::local::asynchronous::Client::tracked(crate::rocket_for_store(#store))
                    .await
                    .unwrap()
            }

            /// The test itself.
            #item_fn

            log4rs_test_utils::test_logging::init_logging_once_for(["poll_backend"], None, None);

            let runtime = rocket::tokio::runtime::Builder::new_multi_thread()
                .thread_name("rocket-worker-test-thread")
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async {
                let rocket_client = setup().await;
                #new_name(#(#test_args),*).await;
            });
        }
    }
    .into()
}

/// Ensure the wrapped test is async, extract parameters to inject, and reject unknown parameters.
fn check_sig(sig: Signature) -> Result<Vec<TokenStream2>, syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new(sig.span(), "Test must be marked `async`"));
    }

    let mut has_client = false;
    let mut args = vec![];

    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            if let Pat::Ident(_) = &*pat_type.pat {
                if let Type::Path(type_path) = &*pat_type.ty {
                    if let Some(type_ident) = type_path.path.get_ident() {
                        if type_ident == "Client" {
                            if has_client {
                                return Err(syn::Error::new(input.span(), "Test cannot accept more than one `rocket::local::asynchronous::Client`"));
                            }
                            has_client = true;
                            args.push(quote! { rocket_client });
                            continue;
                        }
                    }
                }
            }
        }

        return Err(syn::Error::new(
            input.span(),
            "Expected `client_ident: Client`",
        ));
    }

    Ok(args)
}
