use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{create_pda_account, initialize_pda_data, transfer_native, transfer_token};

/**
 * Account context for claiming tokens
 *
 * Mints `quantity` consecutive token ids to the receiver under the active
 * claim condition. The whole call is one instruction: if any step fails,
 * every counter update, payment, and token account created earlier in the
 * call is discarded by the runtime.
 *
 * Remaining accounts: exactly `quantity` uninitialized token state PDAs,
 * ["token", drop_key, token_id] for the ids being minted, in ascending
 * order.
 *
 * Access Control: Any claimant satisfying the active condition
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The drop state account holding the active condition
    /// - Supply counters and next_token_id advance on success
    #[account(mut)]
    pub drop: Account<'info, DropState>,

    /// Wallet the tokens are minted to
    /// - Eligibility counters and ownership are keyed by this wallet
    /// CHECK: may be any address; it does not have to sign
    pub receiver: AccountInfo<'info>,

    /// Claim counter for (active epoch, receiver)
    /// - Derived from: ["wallet_claim", drop_key, condition_epoch, receiver]
    #[account(
        init_if_needed,
        payer = claimant,
        space = WalletClaimStatus::LEN,
        seeds = [
            WALLET_CLAIM_SEED.as_bytes(),
            drop.key().as_ref(),
            drop.condition_epoch.to_le_bytes().as_ref(),
            receiver.key().as_ref()
        ],
        bump
    )]
    pub wallet_claim: Account<'info, WalletClaimStatus>,

    /// The claimant paying for the claim
    /// - Signs the payment and the rent for new accounts
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Destination of the claim payment
    /// CHECK: validated against the treasury recorded in the drop state
    #[account(mut, constraint = treasury.key() == drop.treasury @ DropError::TreasuryMismatch)]
    pub treasury: AccountInfo<'info>,

    /// Mint of the payment currency, required for a non-native price
    pub currency_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Claimant's token account the payment is pulled from
    #[account(mut)]
    pub claimant_currency_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// Treasury's token account the payment lands in
    #[account(mut)]
    pub treasury_currency_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// System program for account creation and native payments
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Counters observed by a successful claim, reported back to the handlers
pub(crate) struct ClaimOutcome {
    pub start_id: u64,
    pub epoch: u64,
    pub supply_claimed: u64,
}

/**
 * Processes a claim end to end
 *
 * Shared by `claim` and `claim_and_create_tba`; the latter propagates any
 * failure from here unchanged.
 *
 * Validation Process:
 * 1. Quantity window (per-call cap before any condition state)
 * 2. Condition validation with stable error precedence
 * 3. Payment collection (native or SPL, per the effective terms)
 * 4. One token state PDA created per minted id
 */
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute_claim<'info>(
    program_id: &Pubkey,
    drop: &mut Account<'info, DropState>,
    wallet_claim: &mut Account<'info, WalletClaimStatus>,
    receiver: &AccountInfo<'info>,
    claimant: &Signer<'info>,
    treasury: &AccountInfo<'info>,
    currency_mint: Option<&InterfaceAccount<'info, Mint>>,
    claimant_currency_account: Option<&InterfaceAccount<'info, TokenAccount>>,
    treasury_currency_account: Option<&InterfaceAccount<'info, TokenAccount>>,
    token_program: &Interface<'info, TokenInterface>,
    system_program: &Program<'info, System>,
    token_state_accounts: &[AccountInfo<'info>],
    quantity: u64,
    currency: Pubkey,
    price_per_token: u64,
    allowlist_proof: &AllowlistProof,
) -> Result<ClaimOutcome> {
    let drop_key = drop.key();

    // ===== VALIDATION PHASE =====

    drop.ensure_claimable_quantity(quantity)?;

    let now = Clock::get()?.unix_timestamp;
    let terms = drop.validate_claim(
        now,
        receiver.key,
        wallet_claim.claimed,
        quantity,
        allowlist_proof,
        &currency,
        price_per_token,
    )?;

    // One token state account per minted id
    require!(
        token_state_accounts.len() == quantity as usize,
        DropError::AccountDerivationFailed
    );

    // ===== EFFECTS PHASE (State Updates) =====

    let start_id = drop.next_token_id;

    drop.condition.supply_claimed = drop
        .condition
        .supply_claimed
        .checked_add(quantity)
        .ok_or(DropError::ArithmeticOverflow)?;
    wallet_claim.claimed = wallet_claim
        .claimed
        .checked_add(quantity)
        .ok_or(DropError::ArithmeticOverflow)?;
    drop.next_token_id = start_id
        .checked_add(quantity)
        .ok_or(DropError::ArithmeticOverflow)?;

    // ===== INTERACTIONS PHASE =====

    collect_payment(
        &terms,
        quantity,
        claimant,
        treasury,
        currency_mint,
        claimant_currency_account,
        treasury_currency_account,
        token_program,
        system_program,
    )?;

    for (index, token_account) in token_state_accounts.iter().enumerate() {
        let token_id = start_id + index as u64;
        let (expected, bump) = TokenState::derive(program_id, &drop_key, token_id);
        require!(
            token_account.key() == expected,
            DropError::AccountDerivationFailed
        );

        let id_bytes = token_id.to_le_bytes();
        let seeds: &[&[u8]] = &[
            TOKEN_SEED.as_bytes(),
            drop_key.as_ref(),
            id_bytes.as_ref(),
            &[bump],
        ];
        create_pda_account(
            &claimant.to_account_info(),
            token_account,
            &system_program.to_account_info(),
            TokenState::LEN,
            program_id,
            &[seeds],
        )?;
        initialize_pda_data(
            &TokenState {
                bump,
                token_id,
                owner: receiver.key(),
                drop: drop_key,
            },
            token_account,
        )?;
    }

    msg!("claimed {} token(s) starting at id {}", quantity, start_id);

    Ok(ClaimOutcome {
        start_id,
        epoch: drop.condition_epoch,
        supply_claimed: drop.condition.supply_claimed,
    })
}

/// Moves `quantity * price` of the effective currency from the claimant to
/// the treasury; a zero total skips the transfer entirely
#[allow(clippy::too_many_arguments)]
fn collect_payment<'info>(
    terms: &EffectiveClaimTerms,
    quantity: u64,
    claimant: &Signer<'info>,
    treasury: &AccountInfo<'info>,
    currency_mint: Option<&InterfaceAccount<'info, Mint>>,
    claimant_currency_account: Option<&InterfaceAccount<'info, TokenAccount>>,
    treasury_currency_account: Option<&InterfaceAccount<'info, TokenAccount>>,
    token_program: &Interface<'info, TokenInterface>,
    system_program: &Program<'info, System>,
) -> Result<()> {
    let total = terms
        .price_per_token
        .checked_mul(quantity)
        .ok_or(DropError::ArithmeticOverflow)?;
    if total == 0 {
        return Ok(());
    }

    if terms.currency == NATIVE_CURRENCY {
        require!(
            claimant.lamports() >= total,
            DropError::InsufficientAllowance
        );
        return transfer_native(
            claimant.to_account_info(),
            treasury.clone(),
            system_program.to_account_info(),
            total,
        );
    }

    let mint = currency_mint.ok_or(DropError::CurrencyAccountMissing)?;
    let from = claimant_currency_account.ok_or(DropError::CurrencyAccountMissing)?;
    let to = treasury_currency_account.ok_or(DropError::CurrencyAccountMissing)?;

    require!(mint.key() == terms.currency, DropError::CurrencyMismatch);
    require!(from.mint == terms.currency, DropError::CurrencyMismatch);
    require!(to.mint == terms.currency, DropError::CurrencyMismatch);
    require!(from.owner == claimant.key(), DropError::Unauthorized);
    require!(from.amount >= total, DropError::InsufficientAllowance);

    transfer_token(
        claimant.to_account_info(),
        from.to_account_info(),
        to.to_account_info(),
        mint.to_account_info(),
        token_program.to_account_info(),
        total,
        mint.decimals,
        None,
    )
}

/**
 * Claims `quantity` tokens for the receiver
 *
 * @param ctx - The account context, plus one token state PDA per id in
 *              remaining accounts
 * @param quantity - Number of tokens to mint
 * @param currency - Currency the claimant expects to pay in
 * @param price_per_token - Price the claimant expects to pay
 * @param allowlist_proof - Membership evidence, ignored while the
 *                          allowlist is open
 * @param _data - Opaque payload, uninterpreted
 *
 * Returns the minted ids in ascending order.
 */
pub fn handle_claim<'info>(
    ctx: Context<'_, '_, '_, 'info, Claim<'info>>,
    quantity: u64,
    currency: Pubkey,
    price_per_token: u64,
    allowlist_proof: AllowlistProof,
    _data: Vec<u8>,
) -> Result<Vec<u64>> {
    let outcome = execute_claim(
        ctx.program_id,
        &mut ctx.accounts.drop,
        &mut ctx.accounts.wallet_claim,
        &ctx.accounts.receiver,
        &ctx.accounts.claimant,
        &ctx.accounts.treasury,
        ctx.accounts.currency_mint.as_ref(),
        ctx.accounts.claimant_currency_account.as_ref(),
        ctx.accounts.treasury_currency_account.as_ref(),
        &ctx.accounts.token_program,
        &ctx.accounts.system_program,
        ctx.remaining_accounts,
        quantity,
        currency,
        price_per_token,
        &allowlist_proof,
    )?;

    emit_cpi!(TokensClaimed {
        drop: ctx.accounts.drop.key(),
        claimant: ctx.accounts.claimant.key(),
        receiver: ctx.accounts.receiver.key(),
        start_id: outcome.start_id,
        quantity,
        epoch: outcome.epoch,
        supply_claimed: outcome.supply_claimed,
    });

    Ok((outcome.start_id..outcome.start_id + quantity).collect())
}
