use crate::infra::build_gateway;
use chrono::Local;
use clap::Args;
use serde_json::json;

use lendcore::error::AppError;
use lendcore::workflows::lending::properties::{InvestmentType, ListingFilter, Property};
use lendcore::workflows::lending::quotes::QuoteRequest;
use lendcore::workflows::lending::underwriting::{
    DscrRequest, FixFlipRequest, UnderwritingConfig, UnderwritingEngine,
};
use lendcore::workflows::lending::SimulatedLatency;

#[derive(Args, Debug)]
pub(crate) struct DscrArgs {
    /// Loan principal in dollars
    #[arg(long)]
    pub(crate) loan_amount: f64,
    /// Annual interest rate as a percentage (7.25 means 7.25%)
    #[arg(long)]
    pub(crate) rate: f64,
    /// Loan term in years
    #[arg(long)]
    pub(crate) term_years: u32,
    /// Gross monthly rent in dollars
    #[arg(long)]
    pub(crate) rent: f64,
    /// Monthly property taxes in dollars
    #[arg(long, default_value_t = 0.0)]
    pub(crate) taxes: f64,
    /// Monthly insurance premium in dollars
    #[arg(long, default_value_t = 0.0)]
    pub(crate) insurance: f64,
}

#[derive(Args, Debug)]
pub(crate) struct FixFlipArgs {
    /// Acquisition price in dollars
    #[arg(long)]
    pub(crate) purchase_price: f64,
    /// Renovation budget in dollars
    #[arg(long)]
    pub(crate) rehab_budget: f64,
    /// Estimated after-repair value in dollars
    #[arg(long)]
    pub(crate) arv: f64,
    /// Holding period in months (0 uses the policy default)
    #[arg(long, default_value_t = 0)]
    pub(crate) holding_months: u32,
    /// Monthly carrying costs in dollars
    #[arg(long, default_value_t = 0.0)]
    pub(crate) monthly_costs: f64,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Restrict the property search to a two-letter state code
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Skip the deal intake portion of the demo
    #[arg(long)]
    pub(crate) skip_intake: bool,
}

pub(crate) fn run_dscr(args: DscrArgs) -> Result<(), AppError> {
    let engine = UnderwritingEngine::new(UnderwritingConfig::default());
    let request = DscrRequest {
        loan_amount: args.loan_amount,
        interest_rate: args.rate,
        term_years: args.term_years,
        rent: args.rent,
        taxes: args.taxes,
        insurance: args.insurance,
    };

    match engine.coverage(&request) {
        Ok(analysis) => {
            println!("DSCR coverage analysis");
            println!("- P&I: ${}/mo", analysis.p_and_i);
            println!("- Total monthly debt: ${}/mo", analysis.monthly_debt);
            println!("- DSCR: {:.2} -> {}", analysis.dscr, analysis.status.label());
        }
        Err(err) => println!("Underwriting rejected the deal: {err}"),
    }

    Ok(())
}

pub(crate) fn run_fix_flip(args: FixFlipArgs) -> Result<(), AppError> {
    let engine = UnderwritingEngine::new(UnderwritingConfig::default());
    let request = FixFlipRequest {
        purchase_price: args.purchase_price,
        rehab_budget: args.rehab_budget,
        arv: args.arv,
        holding_months: args.holding_months,
        monthly_costs: args.monthly_costs,
    };

    match engine.flip_returns(&request) {
        Ok(analysis) => {
            println!("Fix & flip return analysis");
            println!("- Total basis: ${}", analysis.total_basis);
            println!("- Holding costs: ${}", analysis.total_holding);
            println!("- Projected profit: ${}", analysis.profit);
            println!("- ROI: {:.1}% -> {}", analysis.roi, analysis.verdict.label());
        }
        Err(err) => println!("Underwriting rejected the deal: {err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { state, skip_intake } = args;
    let gateway = build_gateway(SimulatedLatency::none());

    println!("Investment lending desk demo");

    let filter = ListingFilter {
        state,
        ..ListingFilter::default()
    };
    let listings = match gateway.catalog.search(&filter) {
        Ok(listings) => listings,
        Err(err) => {
            println!("Property search unavailable: {err}");
            return Ok(());
        }
    };

    if listings.is_empty() {
        println!("No lendable listings match the search.");
        return Ok(());
    }

    println!("\nLendable listings");
    for listing in &listings {
        println!(
            "- #{} {} ({}) | {} | ${}",
            listing.id.0,
            listing.address,
            listing.state,
            listing.investment_type.label(),
            listing.purchase_price
        );
    }

    if let Some(rental) = first_of(&listings, InvestmentType::Dscr) {
        println!("\nRental quote: #{} {}", rental.id.0, rental.address);
        let request = QuoteRequest::new(rental.id, rental.investment_type);
        match gateway.quotes.generate(&request) {
            Ok(quote) => {
                println!(
                    "- {} | ${} at {:.2}% over {} years | est. closing ${}",
                    quote.product_type,
                    quote.loan_amount,
                    quote.interest_rate,
                    quote.term_years,
                    quote.est_closing_costs
                );

                let coverage = gateway.engine.coverage(&DscrRequest {
                    loan_amount: quote.loan_amount as f64,
                    interest_rate: quote.interest_rate,
                    term_years: quote.term_years,
                    rent: f64::from(rental.est_rent.unwrap_or(0)),
                    taxes: f64::from(rental.taxes),
                    insurance: f64::from(rental.insurance),
                });
                match coverage {
                    Ok(analysis) => println!(
                        "- P&I ${}/mo | debt ${}/mo | DSCR {:.2} -> {}",
                        analysis.p_and_i,
                        analysis.monthly_debt,
                        analysis.dscr,
                        analysis.status.label()
                    ),
                    Err(err) => println!("- Coverage unavailable: {err}"),
                }
            }
            Err(err) => println!("- Quote unavailable: {err}"),
        }
    }

    if let Some(flip) = first_of(&listings, InvestmentType::FixFlip) {
        println!("\nFlip analysis: #{} {}", flip.id.0, flip.address);
        let returns = gateway.engine.flip_returns(&FixFlipRequest {
            purchase_price: f64::from(flip.purchase_price),
            rehab_budget: f64::from(flip.rehab),
            arv: f64::from(flip.est_arv.unwrap_or(0)),
            holding_months: 0,
            monthly_costs: f64::from(flip.taxes + flip.insurance),
        });
        match returns {
            Ok(analysis) => println!(
                "- Basis ${} | holding ${} | profit ${} | ROI {:.1}% -> {}",
                analysis.total_basis,
                analysis.total_holding,
                analysis.profit,
                analysis.roi,
                analysis.verdict.label()
            ),
            Err(err) => println!("- Analysis unavailable: {err}"),
        }
    }

    if skip_intake {
        return Ok(());
    }

    println!("\nDeal intake demo");
    let submission = json!({
        "applicant": "Jordan Avery",
        "entity": { "kind": "LLC", "name": "Dogwood Holdings" },
        "property_id": listings[0].id.0,
        "program": listings[0].investment_type.label(),
        "wizard_step": "review_and_submit",
    });

    let record = match gateway.intake.submit(submission) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Received deal {} at {} -> status {}",
        record.deal_id.0,
        record
            .received_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S"),
        record.status.label()
    );

    let status_payload = json!({
        "deal_id": record.deal_id.0,
        "status": record.status.label(),
        "received_at": record.received_at,
    });
    match serde_json::to_string_pretty(&status_payload) {
        Ok(payload) => println!("  Tracking payload:\n{payload}"),
        Err(err) => println!("  Tracking payload unavailable: {err}"),
    }

    Ok(())
}

fn first_of(listings: &[Property], investment_type: InvestmentType) -> Option<&Property> {
    listings
        .iter()
        .find(|listing| listing.investment_type == investment_type)
}
