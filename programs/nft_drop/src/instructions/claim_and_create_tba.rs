use anchor_lang::prelude::*;
use anchor_spl::associated_token::{self, AssociatedToken};
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::instructions::claim::execute_claim;
use crate::state::*;
use crate::utils::{
    create_pda_account, expected_associated_token_address, initialize_pda_data, transfer_token,
};

/// Combined entry-point payload
///
/// Every field is caller-supplied and validated independently; nothing in
/// it is trusted implicitly.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ClaimAndCreateTbaArgs {
    /// Number of tokens to mint
    pub quantity: u64,
    /// Currency the claimant expects to pay in
    pub currency: Pubkey,
    /// Price the claimant expects to pay per token
    pub price_per_token: u64,
    /// Membership evidence, ignored while the allowlist is open
    pub allowlist_proof: AllowlistProof,
    /// Opaque payload, uninterpreted
    pub data: Vec<u8>,
    /// Account implementation identifier, part of the derivation
    pub implementation: Pubkey,
    /// Chain identifier, part of the derivation
    pub chain_id: u64,
    /// Caller-chosen salt, part of the derivation
    pub salt: [u8; 32],
    /// Seed deposit per bound account; 0 skips funding entirely
    pub amount_to_transfer: u64,
}

/**
 * Account context for the combined claim-then-bind-then-fund entry point
 *
 * Runs the exact claim path, then deploys a deterministic bound account for
 * every minted token and, for a non-zero amount_to_transfer, seeds each with
 * a deposit pulled from the claimant. One instruction, one transaction
 * boundary: a failure on any single token unwinds the mint as well.
 *
 * Remaining accounts, in order:
 * - `quantity` token state PDAs (ascending ids, as for claim)
 * - `quantity` token-bound account PDAs for the same ids
 * - `quantity` associated token accounts of the bound accounts for the
 *   funding mint, only when amount_to_transfer > 0
 *
 * Access Control: Any claimant satisfying the active condition
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimAndCreateTba<'info> {
    /// The drop state account holding the active condition
    #[account(mut)]
    pub drop: Account<'info, DropState>,

    /// Wallet the tokens are minted to
    /// CHECK: may be any address; it does not have to sign
    pub receiver: AccountInfo<'info>,

    /// Claim counter for (active epoch, receiver)
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

    /// The claimant; pays the claim price, the rent, and the seed deposits
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

    /// Mint of the seed deposit, required when amount_to_transfer > 0
    pub funding_mint: Option<InterfaceAccount<'info, Mint>>,

    /// Claimant's token account the deposits are pulled from
    #[account(mut)]
    pub claimant_funding_account: Option<InterfaceAccount<'info, TokenAccount>>,

    /// System program for account creation and native payments
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Associated token program for bound-account deposit accounts
    pub associated_token_program: Program<'info, AssociatedToken>,
}

/**
 * Claims tokens and binds a funded account to each
 *
 * @param ctx - The account context plus the remaining-accounts layout above
 * @param args - The combined entry-point payload
 *
 * Returns one (token_id, account) record per minted token, ascending.
 */
pub fn handle_claim_and_create_tba<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimAndCreateTba<'info>>,
    args: ClaimAndCreateTbaArgs,
) -> Result<Vec<TokenBoundAccountRecord>> {
    let quantity = args.quantity as usize;
    let funding = args.amount_to_transfer > 0;

    let expected_accounts = quantity
        .checked_mul(if funding { 3 } else { 2 })
        .ok_or(DropError::ArithmeticOverflow)?;
    require!(
        ctx.remaining_accounts.len() == expected_accounts,
        DropError::AccountDerivationFailed
    );
    let (token_states, rest) = ctx.remaining_accounts.split_at(quantity);
    let (tba_accounts, funding_atas) = rest.split_at(quantity);

    // ===== CLAIM PHASE =====

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
        token_states,
        args.quantity,
        args.currency,
        args.price_per_token,
        &args.allowlist_proof,
    )?;

    emit_cpi!(TokensClaimed {
        drop: ctx.accounts.drop.key(),
        claimant: ctx.accounts.claimant.key(),
        receiver: ctx.accounts.receiver.key(),
        start_id: outcome.start_id,
        quantity: args.quantity,
        epoch: outcome.epoch,
        supply_claimed: outcome.supply_claimed,
    });

    // ===== FUNDING PRECONDITIONS =====

    // The deposit source must cover the whole batch before any account is
    // touched
    if funding {
        let funding_mint = ctx
            .accounts
            .funding_mint
            .as_ref()
            .ok_or(DropError::CurrencyAccountMissing)?;
        let funding_source = ctx
            .accounts
            .claimant_funding_account
            .as_ref()
            .ok_or(DropError::CurrencyAccountMissing)?;
        let total_funding = args
            .amount_to_transfer
            .checked_mul(args.quantity)
            .ok_or(DropError::ArithmeticOverflow)?;
        require!(
            funding_source.mint == funding_mint.key(),
            DropError::CurrencyMismatch
        );
        require!(
            funding_source.owner == ctx.accounts.claimant.key(),
            DropError::Unauthorized
        );
        require!(
            funding_source.amount >= total_funding,
            DropError::InsufficientAllowance
        );
    }

    // ===== BIND AND FUND PHASE =====

    let drop_key = ctx.accounts.drop.key();
    let now = Clock::get()?.unix_timestamp;
    let mut records = Vec::with_capacity(quantity);

    for (index, tba_account) in tba_accounts.iter().enumerate() {
        let token_id = outcome.start_id + index as u64;
        let (expected, bump) = TokenBoundAccount::derive(
            ctx.program_id,
            &args.implementation,
            args.chain_id,
            &drop_key,
            token_id,
            &args.salt,
        );
        require!(
            tba_account.key() == expected,
            DropError::AccountDerivationFailed
        );

        // An account that pre-existed this call is left untouched and emits
        // nothing; only a deployment performed here counts as created
        let already_deployed =
            tba_account.owner == ctx.program_id && !tba_account.data_is_empty();
        if !already_deployed {
            let chain_id_bytes = args.chain_id.to_le_bytes();
            let id_bytes = token_id.to_le_bytes();
            let seeds: &[&[u8]] = &[
                TOKEN_BOUND_SEED.as_bytes(),
                args.implementation.as_ref(),
                chain_id_bytes.as_ref(),
                drop_key.as_ref(),
                id_bytes.as_ref(),
                args.salt.as_ref(),
                &[bump],
            ];
            create_pda_account(
                &ctx.accounts.claimant.to_account_info(),
                tba_account,
                &ctx.accounts.system_program.to_account_info(),
                TokenBoundAccount::LEN,
                ctx.program_id,
                &[seeds],
            )?;
            initialize_pda_data(
                &TokenBoundAccount {
                    bump,
                    token_id,
                    token_contract: drop_key,
                    implementation: args.implementation,
                    chain_id: args.chain_id,
                    salt: args.salt,
                    created_at: now,
                },
                tba_account,
            )?;

            emit_cpi!(TokenBoundAccountCreated {
                token_id,
                account_address: expected,
            });
        }

        if funding {
            let funding_mint = ctx
                .accounts
                .funding_mint
                .as_ref()
                .ok_or(DropError::CurrencyAccountMissing)?;
            let funding_source = ctx
                .accounts
                .claimant_funding_account
                .as_ref()
                .ok_or(DropError::CurrencyAccountMissing)?;

            let ata_account = &funding_atas[index];
            let expected_ata = expected_associated_token_address(
                &expected,
                &funding_mint.key(),
                &ctx.accounts.token_program.key(),
            );
            require!(
                ata_account.key() == expected_ata,
                DropError::AccountDerivationFailed
            );

            associated_token::create_idempotent(CpiContext::new(
                ctx.accounts.associated_token_program.to_account_info(),
                associated_token::Create {
                    payer: ctx.accounts.claimant.to_account_info(),
                    associated_token: ata_account.clone(),
                    authority: tba_account.clone(),
                    mint: funding_mint.to_account_info(),
                    system_program: ctx.accounts.system_program.to_account_info(),
                    token_program: ctx.accounts.token_program.to_account_info(),
                },
            ))?;

            transfer_token(
                ctx.accounts.claimant.to_account_info(),
                funding_source.to_account_info(),
                ata_account.clone(),
                funding_mint.to_account_info(),
                ctx.accounts.token_program.to_account_info(),
                args.amount_to_transfer,
                funding_mint.decimals,
                None,
            )?;

            emit_cpi!(InitialTokenTransferred {
                account_address: expected,
                amount: args.amount_to_transfer,
                asset: funding_mint.key(),
            });
        }

        records.push(TokenBoundAccountRecord {
            token_id,
            account: expected,
        });
    }

    Ok(records)
}
